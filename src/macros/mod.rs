mod impl_traits;
mod spelled_enum;
