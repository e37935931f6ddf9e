//! Service Submission Records
//!
//! A `Service` is one recorded job: a car wash, tyre or battery replacement,
//! and any itemized add-ons, together with the customer and vehicle details
//! captured on the form. Submissions are keyed by `submission_id`, which is
//! assigned at creation and never reassigned.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::constants::{ADDON_PRICES, SERVICE_PRICES};

/// Lifecycle status of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceStatus {
    Draft,
    Submitted,
}

/// Which service categories a submission covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceSelection {
    #[serde(rename = "Car Washing")]
    CarWashing,
    #[serde(rename = "Tyre Replacement")]
    TyreReplacement,
    #[serde(rename = "Battery Replacement")]
    BatteryReplacement,
    #[serde(rename = "Add-ons")]
    Addons,
}

/// One replaced tyre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TyreDetail {
    pub tyre_id: String,
    pub related_service_id: String,
    pub dot_code: String,
    pub dot_serial_number_image: String,
    pub tyre_size: String,
    pub brand: String,
    pub model: String,
}

/// One replaced battery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryDetail {
    pub battery_id: String,
    pub related_service_id: String,
    pub serial_number: String,
    pub brand: String,
    pub exchange_value: f64,
    pub new_battery_amount: f64,
}

/// A free-form service line with its own amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomService {
    pub custom_service_id: String,
    pub related_service_id: String,
    pub service_description: String,
    pub amount: f64,
}

/// A catalogued add-on line (parts, lubricants, accessories, labor)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizedAddon {
    pub id: String,
    pub related_service_id: String,
    pub category: String,
    pub product_name: String,
    pub quantity: u32,
    pub amount: f64,
}

/// A recorded vehicle-service job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Stable key, assigned at creation and never reassigned
    pub submission_id: String,
    /// Last-write instant, stamped by the coordinator on every save
    pub timestamp: DateTime<Utc>,

    pub customer_first_name: String,
    pub customer_last_name: String,
    pub street_address: String,
    pub mobile_number: String,
    pub car_number: String,
    pub car_brand_model: String,
    pub service_selection: Vec<ServiceSelection>,

    pub is_subscription: bool,
    pub carwash_quantity: u32,
    pub car_wash_price: f64,
    pub carwash_total_amount: f64,
    pub before_washing_photo: String,
    pub before_video_inventory: String,
    pub before_video_top_body: String,
    pub before_video_underchassis: String,
    pub after_washing_photo: String,
    pub after_video_interior: String,
    pub after_video_exterior: String,
    pub after_video_underchassis: String,

    pub tyre_replacement_quantity: u32,
    pub tyre_replacement_price: f64,
    pub tyre_replacement_total_amount: f64,
    pub tyre_details: Vec<TyreDetail>,

    pub battery_replacement_quantity: u32,
    pub battery_replacement_total_amount: f64,
    pub battery_details: Vec<BatteryDetail>,

    pub standard_wash_qty: u32,
    pub interior_cleaning_qty: u32,
    pub premium_wash_qty: u32,
    pub wax_service_qty: u32,
    pub engine_detailing_qty: u32,
    pub wheel_balancing_qty: u32,
    pub addons_total: f64,

    pub categorized_addons: Vec<CategorizedAddon>,
    pub categorized_addons_total: f64,

    pub custom_services: Vec<CustomService>,
    pub custom_services_total: f64,

    pub grand_total: f64,
    pub acknowledgement: bool,
    pub status: ServiceStatus,
}

impl Service {
    /// Create an empty submission with a freshly minted id
    pub fn new() -> Self {
        Self {
            submission_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            customer_first_name: String::new(),
            customer_last_name: String::new(),
            street_address: String::new(),
            mobile_number: String::new(),
            car_number: String::new(),
            car_brand_model: String::new(),
            service_selection: Vec::new(),
            is_subscription: false,
            carwash_quantity: 0,
            car_wash_price: SERVICE_PRICES.car_wash_base,
            carwash_total_amount: 0.0,
            before_washing_photo: String::new(),
            before_video_inventory: String::new(),
            before_video_top_body: String::new(),
            before_video_underchassis: String::new(),
            after_washing_photo: String::new(),
            after_video_interior: String::new(),
            after_video_exterior: String::new(),
            after_video_underchassis: String::new(),
            tyre_replacement_quantity: 0,
            tyre_replacement_price: SERVICE_PRICES.tyre_replacement,
            tyre_replacement_total_amount: 0.0,
            tyre_details: Vec::new(),
            battery_replacement_quantity: 0,
            battery_replacement_total_amount: 0.0,
            battery_details: Vec::new(),
            standard_wash_qty: 0,
            interior_cleaning_qty: 0,
            premium_wash_qty: 0,
            wax_service_qty: 0,
            engine_detailing_qty: 0,
            wheel_balancing_qty: 0,
            addons_total: 0.0,
            categorized_addons: Vec::new(),
            categorized_addons_total: 0.0,
            custom_services: Vec::new(),
            custom_services_total: 0.0,
            grand_total: 0.0,
            acknowledgement: false,
            status: ServiceStatus::Draft,
        }
    }

    /// Effective per-wash price, with the subscription discount applied
    pub fn effective_car_wash_price(&self) -> f64 {
        if self.is_subscription {
            self.car_wash_price * (1.0 - SERVICE_PRICES.car_wash_subscription_discount)
        } else {
            self.car_wash_price
        }
    }

    /// Recompute the per-section totals and the grand total from the line items
    pub fn recompute_totals(&mut self) {
        self.carwash_total_amount =
            self.effective_car_wash_price() * f64::from(self.carwash_quantity);
        self.tyre_replacement_total_amount =
            self.tyre_replacement_price * f64::from(self.tyre_replacement_quantity);
        self.battery_replacement_total_amount = self
            .battery_details
            .iter()
            .map(|b| b.new_battery_amount - b.exchange_value)
            .sum();
        self.addons_total = ADDON_PRICES.standard_wash * f64::from(self.standard_wash_qty)
            + ADDON_PRICES.interior_cleaning * f64::from(self.interior_cleaning_qty)
            + ADDON_PRICES.premium_wash * f64::from(self.premium_wash_qty)
            + ADDON_PRICES.wax_service * f64::from(self.wax_service_qty)
            + ADDON_PRICES.engine_detailing * f64::from(self.engine_detailing_qty)
            + ADDON_PRICES.wheel_balancing * f64::from(self.wheel_balancing_qty);
        self.categorized_addons_total = self.categorized_addons.iter().map(|a| a.amount).sum();
        self.custom_services_total = self.custom_services.iter().map(|c| c.amount).sum();
        self.grand_total = self.carwash_total_amount
            + self.tyre_replacement_total_amount
            + self.battery_replacement_total_amount
            + self.addons_total
            + self.categorized_addons_total
            + self.custom_services_total;
    }
}

impl Default for Service {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_service_has_unique_id() {
        let a = Service::new();
        let b = Service::new();
        assert_ne!(a.submission_id, b.submission_id);
        assert_eq!(a.status, ServiceStatus::Draft);
    }

    #[test]
    fn test_subscription_discount() {
        let mut service = Service::new();
        service.car_wash_price = 100.0;
        assert_eq!(service.effective_car_wash_price(), 100.0);

        service.is_subscription = true;
        assert!((service.effective_car_wash_price() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_recompute_totals() {
        let mut service = Service::new();
        service.carwash_quantity = 2;
        service.car_wash_price = 75.0;
        service.standard_wash_qty = 1;
        service.custom_services.push(CustomService {
            custom_service_id: "cs-1".to_string(),
            related_service_id: service.submission_id.clone(),
            service_description: "Headlight polish".to_string(),
            amount: 30.0,
        });
        service.recompute_totals();

        assert_eq!(service.carwash_total_amount, 150.0);
        assert_eq!(service.addons_total, 20.0);
        assert_eq!(service.custom_services_total, 30.0);
        assert_eq!(service.grand_total, 200.0);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let service = Service::new();
        let json = serde_json::to_value(&service).unwrap();
        assert!(json.get("submissionId").is_some());
        assert!(json.get("carBrandModel").is_some());
        assert!(json.get("submission_id").is_none());
    }

    #[test]
    fn test_service_selection_wire_names() {
        let json = serde_json::to_string(&ServiceSelection::TyreReplacement).unwrap();
        assert_eq!(json, "\"Tyre Replacement\"");
    }
}
