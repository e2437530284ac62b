//! Map marker shapes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A listing as shown on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyMarker {
    pub id: String,
    #[serde(alias = "position")]
    pub location: LatLng,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Price in VND.
    pub price: u64,
    /// Area in square metres.
    pub area: f64,
}

const BILLION: u64 = 1_000_000_000;
const MILLION: u64 = 1_000_000;

impl PropertyMarker {
    /// Short price label, e.g. `2,5 tỷ` or `850 triệu`.
    pub fn price_label(&self) -> String {
        format_price(self.price)
    }

    pub fn area_label(&self) -> String {
        format!("{} m²", trim_decimal(self.area))
    }
}

pub fn format_price(price: u64) -> String {
    // Unit is chosen after rounding, so 999_960_000 reads `1 tỷ`.
    let millions = round_tenth(price as f64 / MILLION as f64);
    if millions >= 1000.0 {
        format!("{} tỷ", trim_decimal(price as f64 / BILLION as f64))
    } else if price >= MILLION {
        format!("{} triệu", trim_decimal(millions))
    } else {
        format!("{price} đ")
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// One decimal place, comma separator, no trailing zero.
fn trim_decimal(value: f64) -> String {
    let rounded = round_tenth(value);
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded:.1}").replace('.', ",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn marker(price: u64, area: f64) -> PropertyMarker {
        PropertyMarker {
            id: "p1".into(),
            location: LatLng {
                lat: 10.7769,
                lng: 106.7009,
            },
            title: "Nhà phố Quận 1".into(),
            image: None,
            price,
            area,
        }
    }

    #[test]
    fn price_labels_use_short_units() {
        assert_eq!(marker(2_500_000_000, 1.0).price_label(), "2,5 tỷ");
        assert_eq!(marker(3_000_000_000, 1.0).price_label(), "3 tỷ");
        assert_eq!(marker(850_000_000, 1.0).price_label(), "850 triệu");
        assert_eq!(marker(500_000, 1.0).price_label(), "500000 đ");
    }

    #[test]
    fn prices_just_under_a_billion_promote_to_ty() {
        assert_eq!(format_price(999_999_999), "1 tỷ");
        assert_eq!(format_price(999_960_000), "1 tỷ");
        assert_eq!(format_price(999_940_000), "999,9 triệu");
    }

    #[test]
    fn area_label() {
        assert_eq!(marker(0, 72.0).area_label(), "72 m²");
        assert_eq!(marker(0, 45.25).area_label(), "45,3 m²");
    }

    #[test]
    fn decodes_position_alias() {
        let value = json!({
            "id": "p9",
            "position": { "lat": 21.03, "lng": 105.85 },
            "title": "Căn hộ Ba Đình",
            "price": 1_200_000_000u64,
            "area": 60.0
        });
        let decoded: PropertyMarker = serde_json::from_value(value).unwrap();
        assert_eq!(decoded.location.lat, 21.03);
        assert!(decoded.image.is_none());
    }
}
