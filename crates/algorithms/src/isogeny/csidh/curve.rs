//! x-only arithmetic on Montgomery curves C*y^2 = x^3 + (A/C)*x^2 + x
//!
//! Points are projective (X : Z) pairs; no y-coordinate is ever carried.
//! The differential formulas are only defined when their inputs are not the
//! point at infinity and are neither equal nor inverse to each other;
//! callers are responsible for that.

use subtle::Choice;
use zeroize::Zeroize;

use super::field::Fp;
use super::uint::U512;

/// Projective x-coordinate (X : Z) of a point
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroize)]
pub struct Point {
    /// X coordinate
    pub x: Fp,
    /// Z coordinate; zero for the point at infinity
    pub z: Fp,
}

/// Projective curve coefficient (A : C)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub struct Coeff {
    /// Numerator of the Montgomery coefficient
    pub a: Fp,
    /// Denominator of the Montgomery coefficient
    pub c: Fp,
}

impl Point {
    /// Build from projective coordinates
    pub const fn new(x: Fp, z: Fp) -> Self {
        Self { x, z }
    }

    /// The affine x-coordinate `x`, i.e. (x : 1)
    pub const fn from_x(x: Fp) -> Self {
        Self { x, z: Fp::ONE }
    }

    /// Whether this is the point at infinity (Z == 0)
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Swap `self` and `other` when `choice == 1`
    #[inline]
    pub fn conditional_swap(&mut self, other: &mut Self, choice: u8) {
        Fp::conditional_swap(&mut self.x, &mut other.x, choice);
        Fp::conditional_swap(&mut self.z, &mut other.z, choice);
    }

    /// x(P + Q) from x(P), x(Q) and x(P - Q)
    pub fn x_add(&self, q: &Point, diff: &Point) -> Point {
        let t0 = self.x.add(&self.z).mul(&q.x.sub(&q.z));
        let t1 = self.x.sub(&self.z).mul(&q.x.add(&q.z));
        let t2 = t0.add(&t1).square();
        let t3 = t0.sub(&t1).square();
        Point {
            x: diff.z.mul(&t2),
            z: diff.x.mul(&t3),
        }
    }

    /// x(2P) on the curve (A : C)
    pub fn x_dbl(&self, curve: &Coeff) -> Point {
        let t0 = self.x.add(&self.z).square();
        let t1 = self.x.sub(&self.z).square();
        let t2 = t0.sub(&t1);
        let t1 = Fp::FOUR.mul(&t1).mul(&curve.c);
        let x = t0.mul(&t1);
        let t0 = curve.c.double().add(&curve.a).mul(&t2).add(&t1);
        Point {
            x,
            z: t0.mul(&t2),
        }
    }

    /// Fused ladder step: (x(2P), x(P + Q)) given x(P - Q) and
    /// `a24 = (A + 2C : 4C)`
    pub fn x_dbl_add(&self, q: &Point, diff: &Point, a24: &Coeff) -> (Point, Point) {
        let t0 = self.x.add(&self.z);
        let t1 = self.x.sub(&self.z);
        let ppx = t0.square();
        let t2 = q.x.sub(&q.z);
        let pqx = q.x.add(&q.z);
        let t0 = t0.mul(&t2);
        let ppz = t1.square();
        let t1 = t1.mul(&pqx);
        let t2 = ppx.sub(&ppz);

        let ppz = ppz.mul(&a24.c);
        let ppx = ppx.mul(&ppz);
        let pqx = a24.a.mul(&t2);
        let pqz = t0.sub(&t1);
        let ppz = ppz.add(&pqx).mul(&t2);
        let pqx = t0.add(&t1).square();
        let pqz = pqz.square();

        (
            Point { x: ppx, z: ppz },
            Point {
                x: pqx.mul(&diff.z),
                z: pqz.mul(&diff.x),
            },
        )
    }

    /// [k]P by a left-to-right Montgomery ladder. `k` must be non-zero.
    ///
    /// Leading zero bits of `k` are skipped, so the running time depends on
    /// the bit length of `k`: public scalars only.
    pub fn mul_vartime(&self, k: &U512, curve: &Coeff) -> Point {
        let a24 = curve.a24();
        let top = k.highest_bit_vartime();

        let mut q = self.x_dbl(curve);
        let mut r = *self;
        let mut prev = 1u8;
        for i in (0..top).rev() {
            let bit = k.bit(i);
            q.conditional_swap(&mut r, prev ^ bit);
            (q, r) = q.x_dbl_add(&r, self, &a24);
            prev = bit;
        }
        q.conditional_swap(&mut r, k.bit(0));
        q
    }
}

impl Coeff {
    /// Build from projective coefficients
    pub const fn new(a: Fp, c: Fp) -> Self {
        Self { a, c }
    }

    /// The affine coefficient `a`, i.e. (a : 1)
    pub const fn from_a(a: Fp) -> Self {
        Self { a, c: Fp::ONE }
    }

    /// Ladder constant (A + 2C : 4C)
    pub fn a24(&self) -> Coeff {
        Coeff {
            a: self.c.double().add(&self.a),
            c: self.c.mul(&Fp::FOUR),
        }
    }

    /// Rescale to C == 1.
    ///
    /// Uses Fermat inversion, so C == 0 maps A to 0.
    pub fn normalize(&mut self) {
        let c_inv = self.c.invert();
        self.a = self.a.mul(&c_inv);
        self.c = Fp::ONE;
    }
}

/// Evaluate the odd prime degree `order` isogeny with kernel generated by
/// `kernel`, in the style of Meyer and Reith.
///
/// The curve is moved to twisted Edwards form (A + 2C, A - 2C) and the image
/// point to (X - Z : X + Z); the kernel product over the first
/// (order - 1) / 2 multiples of `kernel` is accumulated, the Edwards
/// coefficients are raised to `order`, and the result is mapped back to
/// Montgomery form. `curve` and `img` are updated in place.
///
/// The loop runs `order / 2` times: `order` must be public.
pub fn isogeny_vartime(img: &mut Point, curve: &mut Coeff, kernel: &Point, order: u64) {
    let two_c = curve.c.double();
    let mut ed_a = curve.a.add(&two_c);
    let mut ed_c = curve.a.sub(&two_c);

    let s = img.x.add(&img.z);
    let d = img.x.sub(&img.z);

    let mut prod_x = kernel.x.sub(&kernel.z);
    let mut prod_z = kernel.x.add(&kernel.z);

    let t1 = prod_x.mul(&s);
    let t0 = prod_z.mul(&d);
    let mut q_x = t0.add(&t1);
    let mut q_z = t0.sub(&t1);

    // multiples[i % 3] holds [i + 1]K during step i
    let mut multiples = [*kernel, kernel.x_dbl(curve), Point::default()];
    for i in 1..(order >> 1) as usize {
        if i >= 2 {
            multiples[i % 3] = multiples[(i - 1) % 3].x_add(kernel, &multiples[(i - 2) % 3]);
        }
        let m = &multiples[i % 3];
        let t1 = m.x.sub(&m.z);
        let t0 = m.x.add(&m.z);
        prod_x = prod_x.mul(&t1);
        prod_z = prod_z.mul(&t0);
        let t1 = t1.mul(&s);
        let t0 = t0.mul(&d);
        q_x = q_x.mul(&t0.add(&t1));
        q_z = q_z.mul(&t0.sub(&t1));
    }

    img.x = img.x.mul(&q_x.square());
    img.z = img.z.mul(&q_z.square());

    ed_a = ed_a.pow_u64(order);
    ed_c = ed_c.pow_u64(order);

    for _ in 0..3 {
        prod_x = prod_x.square();
        prod_z = prod_z.square();
    }

    ed_c = ed_c.mul(&prod_x);
    ed_a = ed_a.mul(&prod_z);

    curve.a = ed_a.add(&ed_c).double();
    curve.c = ed_a.sub(&ed_c);
}

/// x^3 + a*x^2 + x
pub fn montgomery_eval(a: &Fp, x: &Fp) -> Fp {
    x.square().add(&a.mul(x)).add(&Fp::ONE).mul(x)
}
