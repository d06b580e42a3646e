pub mod sum_of_squares;

pub use sum_of_squares::{sum_of_squares, sum_of_squares_below};
