//! Catalog seed data loaded at startup.

use uuid::Uuid;

use crate::domain::{Category, Service, ServiceStep, Subcategory};

pub fn fixture_categories() -> Vec<Category> {
    [("1", "Category 1"), ("2", "Category 2")]
        .into_iter()
        .map(|(id, level_data)| Category {
            id: id.into(),
            level_data: level_data.into(),
        })
        .collect()
}

pub fn fixture_subcategories() -> Vec<Subcategory> {
    [
        ("101", "1", "Subcategory 1A"),
        ("102", "1", "Subcategory 1B"),
        ("201", "2", "Subcategory 2A"),
    ]
    .into_iter()
    .map(|(id, parent_id, level_data)| Subcategory {
        id: id.into(),
        parent_id: parent_id.into(),
        level_data: level_data.into(),
    })
    .collect()
}

/// Seed services. Ids are generated on every call.
pub fn fixture_services() -> Vec<Service> {
    vec![
        service(
            "1",
            "101",
            "1.0",
            "SEO Optimization",
            [
                ("Site Audit", "Analyze website performance"),
                ("Keyword Research", "Find high-performing keywords"),
                ("On-Page SEO", "Optimize page titles and meta tags"),
            ],
        ),
        service(
            "1",
            "102",
            "2.0",
            "Social Media Management",
            [
                ("Content Calendar", "Plan social media posts"),
                ("Engagement", "Respond to comments & messages"),
                ("Analytics", "Monitor performance metrics"),
            ],
        ),
        service(
            "2",
            "201",
            "1.5",
            "Graphic Design",
            [
                ("Logo Design", "Create a unique brand logo"),
                ("Brochure Design", "Design marketing materials"),
                ("Brand Kit", "Develop color palette & typography"),
            ],
        ),
        service(
            "2",
            "201",
            "2.0",
            "Video Editing",
            [
                ("Footage Cutting", "Trim unnecessary parts"),
                ("Color Correction", "Enhance visual quality"),
                ("Sound Mixing", "Balance audio levels"),
            ],
        ),
        service(
            "1",
            "101",
            "3.0",
            "Email Marketing",
            [
                ("Newsletter Creation", "Design engaging emails"),
                ("Audience Segmentation", "Target the right customers"),
                ("A/B Testing", "Optimize email performance"),
            ],
        ),
    ]
}

fn service(
    category_id: &str,
    sub_category_id: &str,
    version: &str,
    name: &str,
    steps: [(&str, &str); 3],
) -> Service {
    Service {
        id: Uuid::new_v4().to_string(),
        category_id: category_id.into(),
        sub_category_id: sub_category_id.into(),
        version: version.into(),
        name: name.into(),
        service_list: steps
            .into_iter()
            .zip(1_i64..)
            .map(|((label_name, label_details), label_no)| ServiceStep {
                id: label_no.to_string(),
                label_no,
                label_name: label_name.into(),
                label_details: label_details.into(),
            })
            .collect(),
    }
}
