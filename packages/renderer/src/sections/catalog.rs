use super::{effective_columns, grid, heading, price, safe_href, section_root, stars, Section};
use crate::context::{CategoryCard, ProductCard};
use crate::vdom::VNode;
use pagekit_schema::props::{CategoriesProps, ProductsProps};
use pagekit_schema::ComponentType;

const PLACEHOLDER_CATEGORIES: [&str; 4] = ["Electronics", "Fashion", "Home & Garden", "Sports"];
const MAX_PRODUCTS: i64 = 24;
const HOT_BADGE_PERCENT: u32 = 30;

fn slug(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn placeholder_categories() -> Vec<CategoryCard> {
    PLACEHOLDER_CATEGORIES
        .iter()
        .map(|name| CategoryCard {
            id: slug(name),
            name: name.to_string(),
            description: format!("Explore our {} collection", name),
            image: format!("https://placehold.co/300x200?text={}", name.replace(' ', "+")),
            url: format!("/products?category={}", slug(name)),
        })
        .collect()
}

fn placeholder_products(count: usize) -> Vec<ProductCard> {
    (1..=count)
        .map(|n| ProductCard {
            id: format!("placeholder-{}", n),
            name: format!("Product {}", n),
            price: 19.99 + 10.0 * (n as f64 - 1.0),
            compare_at_price: None,
            image: format!("https://placehold.co/300x300?text=Product+{}", n),
            category: String::new(),
            rating: None,
            url: "/products".to_string(),
        })
        .collect()
}

pub(crate) fn categories(p: &CategoriesProps, section: &Section<'_>) -> VNode {
    let columns = effective_columns(p.columns, section.ctx.viewport);
    let cards = if section.ctx.catalog.categories.is_empty() {
        placeholder_categories()
    } else {
        section.ctx.catalog.categories.clone()
    };

    let items = cards.iter().map(|category| {
        let href = if category.url.is_empty() {
            format!("/products?category={}", slug(&category.name))
        } else {
            safe_href(&category.url)
        };

        let mut card = VNode::element("a")
            .with_class("pk-category-card")
            .with_attr("href", &href)
            .with_attr("data-navigate", &href);
        if !category.image.is_empty() {
            card = card.with_child(
                VNode::element("img")
                    .with_attr("src", &category.image)
                    .with_attr("alt", &category.name),
            );
        }
        card = card.with_child(VNode::element("h3").with_text(&category.name));
        if p.show_description && !category.description.is_empty() {
            card = card.with_child(VNode::element("p").with_text(&category.description));
        }
        card
    });

    section_root(ComponentType::Categories)
        .with_style("background-color", &p.background_color)
        .with_style("color", &p.text_color)
        .with_style("padding", "48px 24px")
        .with_children(heading("h2", &p.title))
        .with_children(heading("p", &p.subtitle))
        .with_child(grid(columns, 24.0).with_children(items))
}

pub(crate) fn products(p: &ProductsProps, section: &Section<'_>) -> VNode {
    let ctx = section.ctx;
    let columns = effective_columns(p.columns, ctx.viewport);
    let limit = p.limit.clamp(1, MAX_PRODUCTS) as usize;
    let wanted = p.category.trim();

    let selected: Vec<ProductCard> = if ctx.catalog.products.is_empty() {
        placeholder_products(limit)
    } else {
        ctx.catalog
            .products
            .iter()
            .filter(|product| wanted.is_empty() || product.category.eq_ignore_ascii_case(wanted))
            .take(limit)
            .cloned()
            .collect()
    };

    let body = if selected.is_empty() {
        VNode::element("p")
            .with_class("pk-empty")
            .with_text("No products found")
    } else {
        grid(columns, 24.0).with_children(
            selected
                .iter()
                .enumerate()
                .map(|(slot, product)| product_card(p, section, slot, product)),
        )
    };

    section_root(ComponentType::Products)
        .with_style("background-color", &p.background_color)
        .with_style("color", &p.text_color)
        .with_style("padding", "48px 24px")
        .with_children(heading("h2", &p.title))
        .with_child(body)
}

fn product_card(p: &ProductsProps, section: &Section<'_>, slot: usize, product: &ProductCard) -> VNode {
    let decor = &section.ctx.decor;
    let href = if product.url.is_empty() {
        format!("/products/{}", product.id)
    } else {
        safe_href(&product.url)
    };

    let mut card = VNode::element("a")
        .with_class("pk-product-card")
        .with_attr("href", &href)
        .with_attr("data-navigate", &href);

    if p.show_badges && decor.chance(section.id, slot, HOT_BADGE_PERCENT) {
        card = card.with_child(
            VNode::element("span")
                .with_class("pk-badge")
                .with_text("HOT"),
        );
    }
    if !product.image.is_empty() {
        card = card.with_child(
            VNode::element("img")
                .with_attr("src", &product.image)
                .with_attr("alt", &product.name),
        );
    }
    card = card.with_child(VNode::element("h3").with_text(&product.name));

    if p.show_rating {
        let rating = product
            .rating
            .unwrap_or_else(|| decor.rating(section.id, slot));
        card = card.with_child(
            VNode::element("div")
                .with_class("pk-rating")
                .with_text(stars(rating))
                .with_child(
                    VNode::element("span")
                        .with_class("pk-review-count")
                        .with_text(format!("({})", decor.review_count(section.id, slot))),
                ),
        );
    }

    if p.show_price {
        let mut row = VNode::element("div")
            .with_class("pk-price")
            .with_child(VNode::element("strong").with_text(price(product.price)));
        if let Some(compare) = product.compare_at_price.filter(|c| *c > product.price) {
            row = row.with_child(VNode::element("s").with_text(price(compare)));
        }
        card = card.with_child(row);
    }

    card
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Catalog, RenderContext};
    use crate::decor::DecorSource;
    use pagekit_schema::Viewport;

    fn product(id: &str, category: &str) -> ProductCard {
        ProductCard {
            id: id.to_string(),
            name: format!("Item {}", id),
            price: 10.0,
            compare_at_price: Some(15.0),
            image: String::new(),
            category: category.to_string(),
            rating: Some(4.0),
            url: String::new(),
        }
    }

    #[test]
    fn test_products_filter_and_limit() {
        let catalog = Catalog {
            products: vec![
                product("1", "Shoes"),
                product("2", "Hats"),
                product("3", "shoes"),
                product("4", "Shoes"),
            ],
            categories: vec![],
        };
        let ctx = RenderContext::new().with_catalog(catalog);
        let props = ProductsProps {
            category: "SHOES".to_string(),
            limit: 2,
            ..ProductsProps::default()
        };

        let node = products(&props, &Section { id: "p", ctx: &ctx });
        let cards = node.find_all(&|n| n.has_class("pk-product-card"));
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].attr("data-navigate"), Some("/products/1"));
        assert_eq!(cards[1].attr("data-navigate"), Some("/products/3"));
    }

    #[test]
    fn test_products_placeholder_when_catalog_empty() {
        let ctx = RenderContext::new();
        let props = ProductsProps {
            limit: 3,
            ..ProductsProps::default()
        };

        let node = products(&props, &Section { id: "p", ctx: &ctx });
        assert_eq!(node.find_all(&|n| n.has_class("pk-product-card")).len(), 3);
        assert!(node.text_content().contains("Product 3"));
    }

    #[test]
    fn test_products_limit_is_clamped() {
        let ctx = RenderContext::new();
        let props = ProductsProps {
            limit: 500,
            ..ProductsProps::default()
        };

        let node = products(&props, &Section { id: "p", ctx: &ctx });
        assert_eq!(node.find_all(&|n| n.has_class("pk-product-card")).len(), 24);
    }

    #[test]
    fn test_badges_follow_seed() {
        let props = ProductsProps::default();
        let render = |seed| {
            let ctx = RenderContext::new().with_decor(DecorSource::new(seed));
            products(&props, &Section { id: "p", ctx: &ctx })
        };
        assert_eq!(render(11), render(11));
    }

    #[test]
    fn test_badges_hidden_when_disabled() {
        let ctx = RenderContext::new();
        let props = ProductsProps {
            show_badges: false,
            limit: 24,
            ..ProductsProps::default()
        };

        let node = products(&props, &Section { id: "p", ctx: &ctx });
        assert!(node.find_all(&|n| n.has_class("pk-badge")).is_empty());
    }

    #[test]
    fn test_categories_columns_follow_viewport() {
        let ctx = RenderContext::new().with_viewport(Viewport::Mobile);
        let node = categories(&CategoriesProps::default(), &Section { id: "c", ctx: &ctx });
        let grids = node.find_all(&|n| n.has_class("pk-grid"));
        assert_eq!(grids[0].attr("data-columns"), Some("1"));
        assert!(node.text_content().contains("Home & Garden"));
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Home & Garden"), "home-garden");
    }
}
