//! Prime number utilities: primality testing, bounded prime lists, and
//! factorization into a prime multiset.

use rayon::prelude::*;

/// Check if a number is prime.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n.is_multiple_of(2) {
        return false;
    }
    let sqrt_n = (n as f64).sqrt() as u64;
    for i in (3..=sqrt_n).step_by(2) {
        if n.is_multiple_of(i) {
            return false;
        }
    }
    true
}

/// Returns every prime `p` with `2 <= p <= bound`, ascending.
///
/// Each candidate is tested with [`is_prime`], so the cost is
/// O(bound * sqrt(bound)). Bounds below 2 yield an empty list.
///
/// # Example
///
/// ```
/// use math::prime::primes_up_to;
///
/// assert_eq!(primes_up_to(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
/// assert_eq!(primes_up_to(1), Vec::<u64>::new());
/// ```
pub fn primes_up_to(bound: u64) -> Vec<u64> {
    (2..=bound).filter(|&n| is_prime(n)).collect()
}

/// Same as [`primes_up_to`], testing candidates on the rayon pool.
pub fn primes_up_to_parallel(bound: u64) -> Vec<u64> {
    if bound < 2 {
        return vec![];
    }
    (2..=bound).into_par_iter().filter(|&n| is_prime(n)).collect()
}

/// Returns the prime factors of `n` with multiplicity, in ascending order.
///
/// Trial division runs while `factor^2 <= n`; whatever is left above 1
/// afterwards is itself prime and is appended once. The product of the
/// result is always `n`. Both 0 and 1 have no factors.
///
/// # Example
///
/// ```
/// use math::prime::prime_factors;
///
/// assert_eq!(prime_factors(360), vec![2, 2, 2, 3, 3, 5]);
/// assert_eq!(prime_factors(7845), vec![3, 5, 523]); // 523 > sqrt(7845)
/// assert_eq!(prime_factors(1), Vec::<u64>::new());
/// ```
pub fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut factor = 2;

    while factor <= n / factor {
        while n.is_multiple_of(factor) {
            factors.push(factor);
            n /= factor;
        }
        factor += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(is_prime(97));
        assert!(is_prime(1423));
        assert!(!is_prime(1247)); // 29 * 43
    }

    #[test]
    fn test_primes_up_to_30() {
        let expected = vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29];
        assert_eq!(primes_up_to(30), expected);
        assert_eq!(primes_up_to(29), expected);
        assert_eq!(primes_up_to_parallel(30), expected);
    }

    #[test]
    fn test_primes_up_to_small_bounds() {
        assert_eq!(primes_up_to(0), Vec::<u64>::new());
        assert_eq!(primes_up_to(1), Vec::<u64>::new());
        assert_eq!(primes_up_to(2), vec![2]);
        assert_eq!(primes_up_to(3), vec![2, 3]);
        assert_eq!(primes_up_to_parallel(0), Vec::<u64>::new());
        assert_eq!(primes_up_to_parallel(1), Vec::<u64>::new());
        assert_eq!(primes_up_to_parallel(2), vec![2]);
    }

    #[test]
    fn test_primes_up_to_matches_sieve() {
        // Cross-check against a plain sieve of Eratosthenes
        let bound = 10_000usize;
        let mut sieve = vec![true; bound + 1];
        sieve[0] = false;
        sieve[1] = false;
        for i in 2..=(bound as f64).sqrt() as usize {
            if sieve[i] {
                for multiple in (i * i..=bound).step_by(i) {
                    sieve[multiple] = false;
                }
            }
        }
        let expected: Vec<u64> = (0..=bound)
            .filter(|&i| sieve[i])
            .map(|i| i as u64)
            .collect();

        assert_eq!(primes_up_to(bound as u64), expected);
        assert_eq!(primes_up_to_parallel(bound as u64), expected);
    }

    #[test]
    fn test_primes_up_to_sorted_and_unique() {
        for bound in 0..200 {
            let primes = primes_up_to(bound);
            assert!(primes.windows(2).all(|w| w[0] < w[1]), "bound={}", bound);
            assert!(primes.iter().all(|&p| p >= 2 && p <= bound));
        }
    }

    #[test]
    fn test_prime_factors() {
        assert_eq!(prime_factors(0), Vec::<u64>::new());
        assert_eq!(prime_factors(1), Vec::<u64>::new());
        assert_eq!(prime_factors(2), vec![2]);
        assert_eq!(prime_factors(84), vec![2, 2, 3, 7]);
        assert_eq!(prime_factors(1247), vec![29, 43]);
        assert_eq!(prime_factors(1455), vec![3, 5, 97]);
        assert_eq!(prime_factors(1423), vec![1423]);
        assert_eq!(prime_factors(9676), vec![2, 2, 41, 59]);
    }

    #[test]
    fn test_prime_factors_round_trip() {
        for n in 1..=20_000u64 {
            let factors = prime_factors(n);
            assert_eq!(factors.iter().product::<u64>(), n, "n={}", n);
            assert!(factors.iter().all(|&f| is_prime(f)), "n={}", n);
            assert!(factors.windows(2).all(|w| w[0] <= w[1]), "n={}", n);
        }
    }

    #[test]
    fn test_prime_factors_large() {
        // 600851475143 = 71 * 839 * 1471 * 6857
        assert_eq!(prime_factors(600_851_475_143), vec![71, 839, 1471, 6857]);
        assert_eq!(prime_factors(1_000_000_007), vec![1_000_000_007]);
        assert_eq!(
            prime_factors(2 * 1_000_000_007),
            vec![2, 1_000_000_007]
        );
    }
}
