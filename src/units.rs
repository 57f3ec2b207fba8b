use derive_more::{
    Add, AddAssign, Deref, Display, Div, DivAssign, From, Into, Mul, MulAssign, Sub, SubAssign,
    Sum,
};

/// A length in device pixels, the unit of the card canvas. SVG user units map
/// 1:1 onto pixels since the card is rendered at its natural size.
///
/// Arithmetic between two lengths (`+`, `-`) yields a length; scaling by a bare
/// `f32` (`*`, `/`) does too. Ratios of two lengths go through the inner value:
///
/// ```
/// use card_gen::Px;
///
/// let width = Px(900.0) - Px(300.0);
/// assert_eq!(width / 2.0, Px(300.0));
/// assert_eq!(*width / *Px(900.0), 600.0 / 900.0);
/// ```
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    DivAssign,
    Sum,
    Deref,
    Display,
    From,
    Into,
)]
pub struct Px(pub f32);
