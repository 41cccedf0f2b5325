use crate::core::args::{CompareArgs, RevisionRef};
use crate::core::context::{InvocationContext, Trigger, ViewNode};

/// Map a trigger and its invocation context onto comparison endpoints.
///
/// Pure mapping, first match wins, never fails. Always returns a fresh record;
/// the caller's args are cloned, never mutated, so a host reusing the same
/// payload across dispatches cannot observe interference.
pub async fn normalize(
    trigger: Trigger,
    context: &InvocationContext,
    args: Option<&CompareArgs>,
) -> CompareArgs {
    match trigger {
        // HEAD-compare always targets the working tree; a caller-supplied
        // ref2 is discarded on purpose.
        Trigger::CompareWithHead => CompareArgs {
            ref1: Some(RevisionRef::head()),
            ref2: None,
        },
        Trigger::CompareViewNode => {
            if let InvocationContext::ViewNode {
                node: ViewNode::CompareResults(node),
            } = context
            {
                let (ref1, ref2) = node.diff_refs().await;
                CompareArgs { ref1, ref2 }
            } else {
                passthrough(args)
            }
        }
        Trigger::CompareViewNodeWithWorking => {
            if let InvocationContext::ViewNode { node } = context
                && let Some(reference) = node.node_ref()
            {
                CompareArgs {
                    ref1: Some(reference.clone()),
                    ref2: None,
                }
            } else {
                passthrough(args)
            }
        }
        Trigger::Compare => passthrough(args),
    }
}

fn passthrough(args: Option<&CompareArgs>) -> CompareArgs {
    args.cloned().unwrap_or_default()
}
