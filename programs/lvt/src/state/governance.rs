use anchor_lang::prelude::*;

/// Vote tally gating fee-structure updates. Created once by
/// `init_governance`; `update_fee_structure_by_vote` resets the tally.
#[account]
pub struct GovernanceVote {
    pub vote_count: u64,
    pub required_votes: u64,
}

impl GovernanceVote {
    pub const SIZE: usize = 8 + // discriminator
        8 +                     // vote_count
        8;                      // required_votes
}
