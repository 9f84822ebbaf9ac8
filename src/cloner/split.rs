use crate::error::CloneError;

/// How a log of `skip + keep` messages is divided: the first `skip` are
/// discarded, the trailing `keep` are carried into the clone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPlan {
    pub skip: usize,
    pub keep: usize,
}

/// Compute the half-clone split for a log of `total` messages.
///
/// `skip = total / 2`, `keep = total - skip`, so the larger half is always
/// retained when `total` is odd. Pure; does not look at message content.
pub fn split_plan(total: usize) -> Result<SplitPlan, CloneError> {
    if total < 2 {
        return Err(CloneError::InsufficientMessages { count: total });
    }
    let skip = total / 2;
    Ok(SplitPlan { skip, keep: total - skip })
}
