/// Number generator API. All requests should target this domain
pub const BASE_URL: &str = "http://20.244.56.144/evaluation-service";

pub const PRIMES: &str = "primes";
pub const FIBONACCI: &str = "fibo";
pub const EVEN: &str = "even";
pub const RANDOM: &str = "rand";

pub const DEFAULT_TIMEOUT_MS: u64 = 500;
