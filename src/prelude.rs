pub use crate::nullable::Nullable;

pub fn null<T>() -> Nullable<T> {
    Nullable::new()
}

pub fn valid<T>(value: T) -> Nullable<T> {
    Nullable::from(value)
}
