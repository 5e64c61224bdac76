use provtrail_core::{Direction, EdgeId, ExError, ExErrorKind, TraversalError};
use provtrail_core_types::{RequestContext, TraceId};

fn kind_of(err: TraversalError) -> ExErrorKind {
    ExError::from(err).kind()
}

#[test]
fn test_traversal_errors_map_to_stable_kinds() {
    let cases = vec![
        (
            TraversalError::NodeNotFound {
                node_id: "n".into(),
            },
            ExErrorKind::NotFound,
        ),
        (
            TraversalError::EdgeNotFound { edge_id: EdgeId(1) },
            ExErrorKind::NotFound,
        ),
        (
            TraversalError::NoPathFound {
                from: "a".into(),
                to: "b".into(),
            },
            ExErrorKind::NoPath,
        ),
        (
            TraversalError::UnconnectedNodes {
                current: "a".into(),
                next: "b".into(),
            },
            ExErrorKind::UnconnectedNodes,
        ),
        (
            TraversalError::IrreversibleUndo {
                node_id: "z".into(),
                edge_id: EdgeId(2),
            },
            ExErrorKind::IrreversibleUndo,
        ),
        (
            TraversalError::RootBoundary {
                node_id: "r".into(),
                direction: Direction::Ascent,
            },
            ExErrorKind::RootBoundary,
        ),
        (
            TraversalError::HandlerNotRegistered { name: "h".into() },
            ExErrorKind::HandlerNotRegistered,
        ),
        (
            TraversalError::HandlerFailed {
                name: "h".into(),
                step: 0,
                message: "m".into(),
            },
            ExErrorKind::HandlerFailed,
        ),
        (
            TraversalError::DuplicateNode {
                node_id: "n".into(),
            },
            ExErrorKind::AlreadyExists,
        ),
        (
            TraversalError::ParentNotFound {
                node_id: "p".into(),
            },
            ExErrorKind::NotFound,
        ),
        (
            TraversalError::DuplicateHandler { name: "h".into() },
            ExErrorKind::AlreadyExists,
        ),
        (
            TraversalError::ParentChainCycle {
                node_id: "c".into(),
            },
            ExErrorKind::CycleDetected,
        ),
        (
            TraversalError::BrokenLink {
                node_id: "b".into(),
                edge_id: EdgeId(0),
            },
            ExErrorKind::BrokenLink,
        ),
    ];

    for (err, expected) in cases {
        let text = err.to_string();
        assert_eq!(kind_of(err), expected, "for {}", text);
    }
}

#[test]
fn test_irreversible_undo_keeps_node_and_edge() {
    let ex: ExError = TraversalError::IrreversibleUndo {
        node_id: "Z".into(),
        edge_id: EdgeId(4),
    }
    .into();

    assert_eq!(ex.code(), "ERR_IRREVERSIBLE_UNDO");
    assert_eq!(ex.node_id(), Some("Z"));
    assert_eq!(ex.edge_id(), Some(EdgeId(4)));
    assert_eq!(ex.op(), Some("select_step"));
    assert!(ex.message().contains("irreversible"));
}

#[test]
fn test_handler_errors_carry_handler_name() {
    let ex: ExError = TraversalError::HandlerNotRegistered {
        name: "zoom".into(),
    }
    .into();
    assert_eq!(ex.handler(), Some("zoom"));
    assert_eq!(ex.code(), "ERR_HANDLER_NOT_REGISTERED");
}

#[test]
fn test_invariant_kinds_are_flagged() {
    assert!(ExErrorKind::UnconnectedNodes.is_invariant_violation());
    assert!(ExErrorKind::RootBoundary.is_invariant_violation());
    assert!(!ExErrorKind::NotFound.is_invariant_violation());
    assert!(!ExErrorKind::IrreversibleUndo.is_invariant_violation());
}

#[test]
fn test_context_shows_in_display() {
    let ctx = RequestContext::new().with_trace_id(TraceId::from_string("t-9"));
    let ex = ExError::from(TraversalError::NoPathFound {
        from: "a".into(),
        to: "b".into(),
    })
    .with_context(&ctx);

    let text = ex.to_string();
    assert!(text.starts_with("[ERR_NO_PATH]"));
    assert!(text.contains(ctx.request_id.as_str()));
}
