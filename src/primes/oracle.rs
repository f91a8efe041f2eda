//! Trial-division primality test.

/// Check whether `n` is prime.
///
/// Negative numbers, 0 and 1 are not prime. Even numbers other than 2 are
/// rejected immediately; odd candidates are tested against odd divisors up
/// to and including `floor(sqrt(n))`.
///
/// ```
/// use prime_duel::primes::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(101));
/// assert!(!is_prime(121));
/// assert!(!is_prime(-7));
/// ```
#[must_use]
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    // d <= n / d is d <= floor(sqrt(n)) without overflow or float rounding
    let mut divisor = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}
