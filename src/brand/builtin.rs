//! Brand profiles compiled into the binary.

use super::{BrandProfile, GeoCoordinates, MetadataDefaults, OpeningHours, PostalAddress};

pub const BENGALE_ID: &str = "la-porte-du-bengale";

/// All built-in profiles, in display order.
pub fn builtin_profiles() -> Vec<BrandProfile> {
    vec![la_porte_du_bengale()]
}

fn la_porte_du_bengale() -> BrandProfile {
    BrandProfile {
        id: BENGALE_ID.into(),
        name: "La Porte du Bengale".into(),
        address: PostalAddress {
            street_address: "9 rue de Nancy".into(),
            locality: "Épinal".into(),
            region: "Grand Est".into(),
            postal_code: "88000".into(),
            country: "FR".into(),
        },
        geo: GeoCoordinates {
            latitude: "48.1747".into(),
            longitude: "6.4497".into(),
        },
        telephone: "+33329641651".into(),
        cuisine: "Indienne".into(),
        price_range: "€€".into(),
        accepts_reservations: true,
        menu_suffix: "/commander".into(),
        opening_hours: vec![
            OpeningHours::new("12:00", "14:00"),
            OpeningHours::new("18:30", "23:30"),
        ],
        language: "French".into(),
        lang: "fr".into(),
        defaults: MetadataDefaults {
            title: "La Porte du Bengale".into(),
            description: "Restaurant indien authentique à Épinal. Commandez en ligne vos plats \
                préférés : tandoori, curry, biryani, naan. Livraison rapide à Épinal et alentours."
                .into(),
            keywords: "restaurant indien épinal, cuisine indienne épinal, tandoori épinal, \
                curry épinal, biryani épinal, livraison indien épinal"
                .into(),
            image: "https://la-porte-du-bengale.netlify.app/og-image.jpg".into(),
            url: "https://la-porte-du-bengale.netlify.app".into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bengale_literals() {
        let p = la_porte_du_bengale();
        assert_eq!(p.defaults.description.matches("  ").count(), 0);
        assert!(p.defaults.description.starts_with("Restaurant indien authentique à Épinal."));
        assert!(p.defaults.keywords.ends_with("livraison indien épinal"));
        assert_eq!(p.opening_hours.len(), 2);
        assert_eq!(p.menu_suffix, "/commander");
    }

    #[test]
    fn test_builtin_ids_unique() {
        let profiles = builtin_profiles();
        let mut ids: Vec<_> = profiles.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), profiles.len());
    }
}
