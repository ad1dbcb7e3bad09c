use serde::Serialize;

/// Upload-time bonus credited to the uploader, independent of later payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RewardTier {
    pub vxum: i32,
    pub usd: i32,
}

/// Map a member count onto its reward band. Callers validate the count
/// into [50, 500] before asking; the bands themselves are total over all
/// integers, so out-of-range input still lands in the nearest band.
pub fn reward(member_count: u32) -> RewardTier {
    if member_count <= 100 {
        return RewardTier { vxum: 5, usd: 1 };
    }
    if member_count <= 200 {
        return RewardTier { vxum: 6, usd: 2 };
    }
    if member_count <= 300 {
        return RewardTier { vxum: 7, usd: 3 };
    }
    if member_count <= 400 {
        return RewardTier { vxum: 8, usd: 4 };
    }
    RewardTier { vxum: 10, usd: 5 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_bands() {
        assert_eq!(reward(50), RewardTier { vxum: 5, usd: 1 });
        assert_eq!(reward(100), RewardTier { vxum: 5, usd: 1 });
        assert_eq!(reward(101), RewardTier { vxum: 6, usd: 2 });
        assert_eq!(reward(200), RewardTier { vxum: 6, usd: 2 });
        assert_eq!(reward(201), RewardTier { vxum: 7, usd: 3 });
        assert_eq!(reward(300), RewardTier { vxum: 7, usd: 3 });
        assert_eq!(reward(301), RewardTier { vxum: 8, usd: 4 });
        assert_eq!(reward(400), RewardTier { vxum: 8, usd: 4 });
        assert_eq!(reward(401), RewardTier { vxum: 10, usd: 5 });
        assert_eq!(reward(500), RewardTier { vxum: 10, usd: 5 });
    }

    #[test]
    fn test_reward_is_deterministic() {
        for count in [50u32, 150, 250, 350, 450] {
            assert_eq!(reward(count), reward(count));
        }
    }
}
