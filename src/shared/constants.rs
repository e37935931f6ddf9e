//! Price table and catalogue constants for service submissions.

/// Fixed prices for the quick add-on checkboxes
pub struct AddonPrices {
    pub standard_wash: f64,
    pub interior_cleaning: f64,
    pub premium_wash: f64,
    pub wax_service: f64,
    pub engine_detailing: f64,
    pub wheel_balancing: f64,
}

pub const ADDON_PRICES: AddonPrices = AddonPrices {
    standard_wash: 20.0,
    interior_cleaning: 35.0,
    premium_wash: 40.0,
    wax_service: 15.0,
    engine_detailing: 50.0,
    wheel_balancing: 25.0,
};

/// Base prices for the primary service categories
pub struct ServicePrices {
    pub car_wash_base: f64,
    /// Fractional discount applied to subscription washes
    pub car_wash_subscription_discount: f64,
    pub tyre_replacement: f64,
}

pub const SERVICE_PRICES: ServicePrices = ServicePrices {
    car_wash_base: 75.0,
    car_wash_subscription_discount: 0.2,
    tyre_replacement: 150.0,
};

/// Categories available for itemized add-on lines
pub const ADDON_CATEGORIES: [&str; 5] = ["Parts", "Lubricants", "Accessories", "Labor", "Other"];
