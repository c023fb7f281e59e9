//! Property tests for GF(256) arithmetic

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use tss::field;

/// A polynomial of degree 0..=15 with distinct non-zero evaluation points
#[derive(Clone, Debug)]
struct Polynomial {
    coefficients: Vec<u8>,
    points: Vec<u8>,
}

impl Arbitrary for Polynomial {
    fn arbitrary(g: &mut Gen) -> Self {
        let degree = usize::from(u8::arbitrary(g) % 16);
        let coefficients: Vec<u8> = (0..=degree).map(|_| u8::arbitrary(g)).collect();

        // Need degree + 1 distinct non-zero x values
        let mut points = Vec::with_capacity(degree + 1);
        while points.len() <= degree {
            let x = u8::arbitrary(g);
            if x != 0 && !points.contains(&x) {
                points.push(x);
            }
        }

        Polynomial {
            coefficients,
            points,
        }
    }
}

#[quickcheck]
fn prop_mul_commutes(a: u8, b: u8) -> bool {
    field::mul(a, b) == field::mul(b, a)
}

#[quickcheck]
fn prop_mul_distributes_over_add(a: u8, b: u8, c: u8) -> bool {
    field::mul(a, field::add(b, c)) == field::add(field::mul(a, b), field::mul(a, c))
}

#[quickcheck]
fn prop_div_undoes_mul(a: u8, b: u8) -> bool {
    if b == 0 {
        // zero divided by anything is zero, everything else is an error
        return field::div(a, b).is_err() == (a != 0);
    }
    field::div(field::mul(a, b), b) == Ok(a)
}

/// Interpolating enough points at zero yields the constant term
#[quickcheck]
fn prop_interpolation_recovers_constant_term(poly: Polynomial) -> bool {
    let values: Vec<u8> = poly
        .points
        .iter()
        .map(|&x| field::eval(x, &poly.coefficients).unwrap())
        .collect();

    field::interpolate(&poly.points, &values) == Ok(poly.coefficients[0])
}
