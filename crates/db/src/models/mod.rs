pub mod doll;
