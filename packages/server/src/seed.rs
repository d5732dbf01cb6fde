//! Default templates shipped with every store

use pagekit_gateway::TemplateRepository;
use pagekit_schema::{ComponentInstance, ComponentType, PropBag, Template, TemplateCategory};

fn section(id: &str, component_type: ComponentType, patch: PropBag) -> ComponentInstance {
    ComponentInstance::new(component_type)
        .with_id(id)
        .with_props(&patch)
}

pub fn default_templates() -> Vec<Template> {
    vec![
        Template {
            id: "default-homepage".to_string(),
            ..Template::new("Classic Storefront", TemplateCategory::Homepage)
                .with_description("Hero, categories, featured products and newsletter")
                .with_components(vec![
                    section("home-banner", ComponentType::Banner, PropBag::new()),
                    section("home-hero", ComponentType::Hero, PropBag::new()),
                    section("home-categories", ComponentType::Categories, PropBag::new()),
                    section("home-products", ComponentType::Products, PropBag::new()),
                    section("home-features", ComponentType::Features, PropBag::new()),
                    section("home-testimonials", ComponentType::Testimonials, PropBag::new()),
                    section("home-newsletter", ComponentType::Newsletter, PropBag::new()),
                ])
        },
        Template {
            id: "default-product".to_string(),
            ..Template::new("Product Launch", TemplateCategory::Product)
                .with_description("Launch page with countdown, gallery and FAQ")
                .with_components(vec![
                    section(
                        "launch-hero",
                        ComponentType::Hero,
                        PropBag::new()
                            .with("title", "Meet the New Collection")
                            .with("buttonText", "Pre-order"),
                    ),
                    section("launch-countdown", ComponentType::Countdown, PropBag::new()),
                    section("launch-gallery", ComponentType::Gallery, PropBag::new()),
                    section(
                        "launch-products",
                        ComponentType::Products,
                        PropBag::new().with("limit", 4).with("title", "Available Now"),
                    ),
                    section("launch-faq", ComponentType::Faq, PropBag::new()),
                ])
        },
        Template {
            id: "default-about".to_string(),
            ..Template::new("About Us", TemplateCategory::About)
                .with_description("Story, values and contact details")
                .with_components(vec![
                    section(
                        "about-hero",
                        ComponentType::Hero,
                        PropBag::new()
                            .with("title", "Our Story")
                            .with("buttonText", "")
                            .with("height", 360),
                    ),
                    section(
                        "about-text",
                        ComponentType::Text,
                        PropBag::new().with(
                            "content",
                            "We started as a small neighborhood shop.\nToday we ship to customers all over the country.",
                        ),
                    ),
                    section("about-features", ComponentType::Features, PropBag::new()),
                    section("about-contact", ComponentType::Contact, PropBag::new()),
                ])
        },
    ]
}

/// Insert the defaults into an empty repository. Returns how many were added.
pub fn seed_defaults(repo: &mut TemplateRepository) -> usize {
    if !repo.is_empty() {
        return 0;
    }
    let defaults = default_templates();
    let count = defaults.len();
    for template in defaults {
        repo.seed_default(template);
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_schema::{validate_template, ValidationLevel};

    #[test]
    fn test_seeds_three_defaults() {
        let mut repo = TemplateRepository::new();
        assert_eq!(seed_defaults(&mut repo), 3);

        let listed = repo.list();
        assert_eq!(listed.len(), 3);
        assert!(listed.iter().all(|t| t.is_default));
    }

    #[test]
    fn test_non_empty_store_is_left_alone() {
        let mut repo = TemplateRepository::new();
        repo.create(Template::new("Mine", TemplateCategory::Custom));
        assert_eq!(seed_defaults(&mut repo), 0);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_defaults_are_valid() {
        for template in default_templates() {
            let errors: Vec<_> = validate_template(&template)
                .into_iter()
                .filter(|i| i.level == ValidationLevel::Error)
                .collect();
            assert!(errors.is_empty(), "{}: {:?}", template.name, errors);
        }
    }
}
