pub mod combination;
pub mod prime;

pub use combination::{Combinations, binomial, combinations};
pub use prime::{is_prime, prime_factors, primes_up_to, primes_up_to_parallel};
