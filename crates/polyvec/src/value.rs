use std::fmt::{self, Debug, Write};

/// Marker trait for types that can be stored in a [`PolyVec`](crate::PolyVec).
pub trait VecValue
where
    Self: Sized + Debug + 'static,
{
}

impl<T> VecValue for T where T: Sized + Debug + 'static {}

/// Per-element text representation used when printing a vector.
pub trait Printable {
    /// Write the value as it should appear on its own output line (without the newline).
    fn fmt_line(&self, f: &mut String) -> fmt::Result;
}

macro_rules! impl_printable_display {
    ($($t:ty),*) => {
        $(
            impl Printable for $t {
                #[inline]
                fn fmt_line(&self, f: &mut String) -> fmt::Result {
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

impl_printable_display!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, String, &'static str
);

/// Decimal exponents outside `MIN_PLAIN_EXP..MAX_PLAIN_EXP` switch to exponent notation.
const MIN_PLAIN_EXP: i32 = -4;
const MAX_PLAIN_EXP: i32 = 17;

// Shortest round-trip digits in C's `%g` layout: plain decimal for moderate
// magnitudes, `<mantissa>e<exp>` otherwise, `inf`/`nan` for non-finite values.
macro_rules! impl_printable_float {
    ($($t:ty),*) => {
        $(
            impl Printable for $t {
                #[inline]
                fn fmt_line(&self, f: &mut String) -> fmt::Result {
                    if self.is_nan() {
                        f.write_str("nan")
                    } else if self.is_infinite() {
                        f.write_str(if self.is_sign_negative() { "-inf" } else { "inf" })
                    } else {
                        let exp_form = format!("{:e}", self);
                        let exp = exp_form
                            .rsplit_once('e')
                            .and_then(|(_, exp)| exp.parse::<i32>().ok())
                            .unwrap_or(0);
                        if (MIN_PLAIN_EXP..MAX_PLAIN_EXP).contains(&exp) {
                            write!(f, "{}", self)
                        } else {
                            f.write_str(&exp_form)
                        }
                    }
                }
            }
        )*
    };
}

impl_printable_float!(f32, f64);
