pub mod street;

pub use self::street::StreetStream;
