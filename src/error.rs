use crate::span::Interval;

/// An error that can be pointed at in the source code.
pub trait PositionalError {
    fn interval(&self) -> Interval;
    fn describe(&self) -> String;
}
