use avg_types::NumberType;
use rand::Rng;
use rand::seq::IndexedRandom;

/// 开发环境用的本地样本，避免访问真实服务
/// offline sample pools used instead of the real number service
const PRIME_POOL: [i64; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];
const FIBONACCI_POOL: [i64; 11] = [1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];
const EVEN_POOL: [i64; 12] = [2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24];
const RANDOM_MIN: i64 = 1;
const RANDOM_MAX_EXCLUSIVE: i64 = 100;

const MAX_SAMPLE: usize = 5;

fn pool(number_type: NumberType) -> Vec<i64> {
    match number_type {
        NumberType::Prime => PRIME_POOL.to_vec(),
        NumberType::Fibonacci => FIBONACCI_POOL.to_vec(),
        NumberType::Even => EVEN_POOL.to_vec(),
        NumberType::Random => (RANDOM_MIN..RANDOM_MAX_EXCLUSIVE).collect(),
    }
}

/// 从样本池中随机取 1..=5 个互不相同的数字
pub fn sample_numbers(number_type: NumberType) -> Vec<i64> {
    sample_numbers_with(number_type, &mut rand::rng())
}

pub fn sample_numbers_with<R: Rng + ?Sized>(number_type: NumberType, rng: &mut R) -> Vec<i64> {
    let pool = pool(number_type);
    let amount = rng.random_range(1..=MAX_SAMPLE.min(pool.len()));
    pool.choose_multiple(rng, amount).copied().collect()
}
