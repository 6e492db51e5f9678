use shared_types::VehicleId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub registration: String,
    pub make: String,
    pub model: String,
    pub year: u16,
}
