// crates/platformer_game/src/rating.rs

/// Stars earned for collecting `collected` of `total` coins: three from 80%,
/// two from 50%, otherwise one.
pub fn star_rating(collected: u32, total: usize) -> u8 {
    let collected = collected as u64;
    let total = total as u64;
    if collected * 5 >= total * 4 {
        3
    } else if collected * 2 >= total {
        2
    } else {
        1
    }
}
