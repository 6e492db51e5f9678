mod customer_id;
mod macros;
mod rental_id;
mod vehicle_id;

pub use customer_id::CustomerId;
pub use rental_id::RentalId;
pub use vehicle_id::VehicleId;
