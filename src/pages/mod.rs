//! Service-page configuration records.
//!
//! An ordered, immutable table describing the marketing sub-pages, plus the
//! emitters that list it. The table is defined once at startup and has no
//! lifecycle beyond the process; nothing here touches the filesystem.

use lazy_static::lazy_static;
use serde::Serialize;

/// Configuration for one service sub-page.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceRecord {
    /// Output filename of the page
    pub filename: String,
    /// `<title>` text
    pub title: String,
    /// h1 markup, including the highlight span
    pub heading: String,
    /// Plain service name
    pub service_name: String,
    /// URL-encoded text for the WhatsApp contact link
    pub whatsapp_text: String,
    /// Meta description
    pub description: String,
    /// SEO keywords
    pub keywords: Vec<String>,
    /// Key of the before image in the comparison slider
    pub image_before: String,
    /// Key of the after image in the comparison slider
    pub image_after: String,
}

fn record(
    filename: &str,
    title: &str,
    heading: &str,
    service_name: &str,
    whatsapp_text: &str,
    description: &str,
    keywords: &[&str],
    image_before: &str,
    image_after: &str,
) -> ServiceRecord {
    ServiceRecord {
        filename: filename.to_string(),
        title: title.to_string(),
        heading: heading.to_string(),
        service_name: service_name.to_string(),
        whatsapp_text: whatsapp_text.to_string(),
        description: description.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        image_before: image_before.to_string(),
        image_after: image_after.to_string(),
    }
}

lazy_static! {
    /// The service pages, in the order they appear on the site.
    pub static ref SERVICE_PAGES: Vec<ServiceRecord> = vec![
        record(
            "exterior-detailing-dubai.html",
            "Exterior Detailing Dubai - Showroom-Quality Paint Enhancement & Protection",
            "Exterior Detailing <span class=\"text-borz-gold\">Dubai</span>",
            "Exterior Detailing",
            "Exterior%20Detailing",
            "Professional exterior detailing in Dubai. Paint correction, polishing, and protection \
             for luxury cars in Al Quoz. Remove swirls, restore paint clarity, and protect your \
             vehicle from Dubai's harsh desert conditions.",
            &[
                "exterior detailing Dubai",
                "car exterior detailing Al Quoz",
                "paint correction Dubai",
                "car polishing Dubai",
                "exterior car wash Dubai",
                "paint enhancement Dubai",
                "luxury car detailing Dubai",
            ],
            "polish-before",
            "polish-after",
        ),
        record(
            "paint-correction-dubai.html",
            "Paint Correction Dubai - Professional Swirl & Scratch Removal",
            "Paint Correction <span class=\"text-borz-gold\">Dubai</span>",
            "Paint Correction",
            "Paint%20Correction",
            "Professional paint correction in Dubai. Remove swirl marks, scratches, and paint \
             defects. Restore your vehicle's paint to showroom condition with multi-stage \
             polishing and correction techniques.",
            &[
                "paint correction Dubai",
                "paint correction Al Quoz",
                "swirl mark removal Dubai",
                "scratch removal Dubai",
                "paint polishing Dubai",
                "paint enhancement Dubai",
                "luxury car paint correction UAE",
            ],
            "polish-before",
            "polish-after",
        ),
        record(
            "window-tinting-dubai.html",
            "Window Tinting Dubai - Premium Car Window Film Installation",
            "Window Tinting <span class=\"text-borz-gold\">Dubai</span>",
            "Window Tinting",
            "Window%20Tinting",
            "Professional window tinting in Dubai. Premium heat rejection film, UV protection, \
             and RTA-compliant installation. Reduce cabin temperature by 15-20\u{b0}C and protect \
             your interior from Dubai's intense sun.",
            &[
                "window tinting Dubai",
                "car window tinting Al Quoz",
                "car tint Dubai",
                "window film Dubai",
                "luxury car tinting UAE",
                "ceramic window tint Dubai",
                "best window tinting Dubai",
            ],
            "tint-before",
            "tint-after",
        ),
        record(
            "full-detailing-dubai.html",
            "Full Detailing Dubai - Complete Interior & Exterior Car Detailing Service",
            "Full Detailing <span class=\"text-borz-gold\">Dubai</span>",
            "Full Detailing",
            "Full%20Detailing",
            "Complete car detailing in Dubai. Comprehensive interior and exterior cleaning, paint \
             correction, and protection. One-stop service for showroom-quality results in Al Quoz.",
            &[
                "full detailing Dubai",
                "complete car detailing Dubai",
                "full car detail Al Quoz",
                "comprehensive car detailing UAE",
                "luxury car detailing Dubai",
                "premium car detailing Dubai",
            ],
            "interior-before",
            "interior-after",
        ),
        record(
            "paint-protection-dubai.html",
            "Paint Protection Dubai - Complete Guide to Protecting Your Car's Paint",
            "Paint Protection <span class=\"text-borz-gold\">Dubai</span>",
            "Paint Protection",
            "Paint%20Protection",
            "Complete paint protection solutions in Dubai. Compare PPF vs ceramic coating, choose \
             the best protection for your vehicle, and shield your paint from Dubai's harsh \
             desert conditions.",
            &[
                "paint protection Dubai",
                "car paint protection Al Quoz",
                "paint protection film Dubai",
                "paint sealant Dubai",
                "vehicle paint protection UAE",
                "best paint protection Dubai",
            ],
            "ppf-before",
            "ppf-after",
        ),
        record(
            "engine-bay-detailing-dubai.html",
            "Engine Bay Detailing Dubai - Professional Engine Compartment Cleaning",
            "Engine Bay Detailing <span class=\"text-borz-gold\">Dubai</span>",
            "Engine Bay Detailing",
            "Engine%20Bay%20Detailing",
            "Professional engine bay detailing in Dubai. Deep cleaning, degreasing, and protection \
             for your engine compartment. Restore your engine bay to showroom condition in Al Quoz.",
            &[
                "engine bay detailing Dubai",
                "engine cleaning Dubai",
                "engine bay cleaning Al Quoz",
                "engine detailing Dubai",
                "engine compartment cleaning UAE",
                "luxury car engine detailing",
            ],
            "interior-before",
            "interior-after",
        ),
        record(
            "headlight-restoration-dubai.html",
            "Headlight Restoration Dubai - Professional Headlight Cleaning & Restoration",
            "Headlight Restoration <span class=\"text-borz-gold\">Dubai</span>",
            "Headlight Restoration",
            "Headlight%20Restoration",
            "Professional headlight restoration in Dubai. Remove yellowing, fogging, and \
             oxidation. Restore clarity and improve visibility with our premium headlight \
             restoration service in Al Quoz.",
            &[
                "headlight restoration Dubai",
                "headlight polishing Dubai",
                "foggy headlight repair Al Quoz",
                "headlight restoration UAE",
                "yellow headlight restoration Dubai",
                "headlight cleaning Dubai",
            ],
            "polish-before",
            "polish-after",
        ),
    ];
}

/// Writes the page listing to `out`: a count line followed by one filename per record.
pub fn write_listing(out: &mut impl std::io::Write) -> std::io::Result<()> {
    writeln!(
        out,
        "Generated {} service page configurations",
        SERVICE_PAGES.len()
    )?;
    for page in SERVICE_PAGES.iter() {
        writeln!(out, "  - {}", page.filename)?;
    }
    Ok(())
}

/// Renders the full record table as pretty-printed JSON for downstream templating.
pub fn to_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&*SERVICE_PAGES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_ordered_and_complete() {
        assert_eq!(SERVICE_PAGES.len(), 7);
        assert_eq!(SERVICE_PAGES[0].filename, "exterior-detailing-dubai.html");
        assert_eq!(SERVICE_PAGES[6].filename, "headlight-restoration-dubai.html");
        for page in SERVICE_PAGES.iter() {
            assert!(page.filename.ends_with(".html"));
            assert!(!page.keywords.is_empty());
            assert!(!page.whatsapp_text.contains(' '), "contact text must stay URL-encoded");
        }
    }

    #[test]
    fn listing_prints_count_and_filenames() {
        let mut buf = Vec::new();
        write_listing(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Generated 7 service page configurations"));
        assert_eq!(text.lines().count(), 8);
        assert!(text.contains("  - window-tinting-dubai.html"));
    }

    #[test]
    fn json_dump_round_trips() {
        let json = to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 7);
        assert_eq!(parsed[2]["service_name"], "Window Tinting");
    }
}
