use dreamgarden_types::Rating;
use dreamgarden_types::models::Rewards;

/// Dewdrops are twice the rating; sunlight equals the rating, capped at the
/// five-star bonus of 5.
pub fn compute_rewards(rating: Rating) -> Rewards {
    let stars = rating.get() as u32;
    Rewards {
        dewdrops: stars * 2,
        sunlight: if rating.is_max() { 5 } else { stars },
    }
}
