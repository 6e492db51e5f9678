use shared_types::{CustomerId, RentalId, VehicleId};
use time::OffsetDateTime;

/// One recorded lease transaction. Created by the caller, stored and
/// forwarded as-is; no field is validated at this layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Rental {
    pub id: RentalId,
    pub vehicle_id: VehicleId,
    pub customer_id: CustomerId,
    pub start_date: OffsetDateTime,
    pub end_date: OffsetDateTime,
    pub total_cost: f64,
}
