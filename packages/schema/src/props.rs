//! # Typed Property Records
//!
//! Each component type has a record with typed fields and a documented
//! default for every field. Records are resolved from the open [`PropBag`]
//! leniently: a missing or ill-typed key falls back to the field default, so
//! resolving never fails.
//!
//! The defaults declared here are the registry defaults: a freshly created
//! component's bag is exactly `Record::default().to_bag()`.

use crate::component_type::ComponentType;
use crate::value::{FromProp, IntoProp, PropBag, PropValue};

/// Declares a typed property record backed by bag keys.
macro_rules! props_record {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $field:ident : $ty:ty = $key:literal => $default:expr ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $( pub $field: $ty, )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default.into(), )*
                }
            }
        }

        impl $name {
            /// Bag keys this record reads
            pub const KEYS: &'static [&'static str] = &[$($key),*];

            pub fn from_bag(bag: &PropBag) -> Self {
                let defaults = Self::default();
                Self {
                    $(
                        $field: bag
                            .get($key)
                            .and_then(<$ty as FromProp>::from_prop)
                            .unwrap_or(defaults.$field),
                    )*
                }
            }

            pub fn to_bag(&self) -> PropBag {
                let mut bag = PropBag::new();
                $( bag.insert($key, self.$field.clone().into_prop()); )*
                bag
            }
        }
    };
}

/// Declares a string-valued option set stored as its lowercase name.
macro_rules! prop_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $( $variant:ident => $text:literal ),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $variant, )*
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $text, )*
                }
            }
        }

        impl FromProp for $name {
            fn from_prop(value: &PropValue) -> Option<Self> {
                match value.as_str()?.trim() {
                    $( $text => Some($name::$variant), )*
                    _ => None,
                }
            }
        }

        impl From<$name> for PropValue {
            fn from(value: $name) -> Self {
                PropValue::Text(value.as_str().to_string())
            }
        }
    };
}

prop_enum!(TextAlign {
    Left => "left",
    Center => "center",
    Right => "right",
});

prop_enum!(ButtonVariant {
    Primary => "primary",
    Secondary => "secondary",
    Outline => "outline",
});

prop_enum!(ButtonSize {
    Small => "small",
    Medium => "medium",
    Large => "large",
});

prop_enum!(ObjectFit {
    Cover => "cover",
    Contain => "contain",
    Fill => "fill",
});

props_record!(
    /// Full-width hero banner with headline and call to action
    HeroProps {
        title: String = "title" => "Welcome to Our Store",
        subtitle: String = "subtitle" => "Discover amazing products at unbeatable prices",
        button_text: String = "buttonText" => "Shop Now",
        button_link: String = "buttonLink" => "/products",
        background_image: String = "backgroundImage" => "",
        background_color: String = "backgroundColor" => "#1e293b",
        text_color: String = "textColor" => "#ffffff",
        text_align: TextAlign = "textAlign" => TextAlign::Center,
        height: f64 = "height" => 500.0,
    }
);

props_record!(
    CategoriesProps {
        title: String = "title" => "Shop by Category",
        subtitle: String = "subtitle" => "",
        columns: i64 = "columns" => 4i64,
        show_description: bool = "showDescription" => true,
        background_color: String = "backgroundColor" => "#ffffff",
        text_color: String = "textColor" => "#111827",
    }
);

props_record!(
    ProductsProps {
        title: String = "title" => "Featured Products",
        columns: i64 = "columns" => 4i64,
        limit: i64 = "limit" => 8i64,
        category: String = "category" => "",
        show_price: bool = "showPrice" => true,
        show_rating: bool = "showRating" => true,
        show_badges: bool = "showBadges" => true,
        background_color: String = "backgroundColor" => "#f8fafc",
        text_color: String = "textColor" => "#111827",
    }
);

props_record!(
    /// Thin promotional strip
    BannerProps {
        text: String = "text" => "Free shipping on all orders over $50",
        link: String = "link" => "",
        background_color: String = "backgroundColor" => "#ef4444",
        text_color: String = "textColor" => "#ffffff",
        text_align: TextAlign = "textAlign" => TextAlign::Center,
    }
);

props_record!(
    TextProps {
        content: String = "content" => "Add your text here",
        font_size: f64 = "fontSize" => 16.0,
        text_align: TextAlign = "textAlign" => TextAlign::Left,
        text_color: String = "textColor" => "#1f2937",
        background_color: String = "backgroundColor" => "transparent",
    }
);

props_record!(
    ImageProps {
        src: String = "src" => "https://placehold.co/1200x400",
        alt: String = "alt" => "Image",
        height: f64 = "height" => 400.0,
        link: String = "link" => "",
        object_fit: ObjectFit = "objectFit" => ObjectFit::Cover,
        border_radius: f64 = "borderRadius" => 0.0,
    }
);

props_record!(
    ButtonProps {
        text: String = "text" => "Click Here",
        link: String = "link" => "#",
        variant: ButtonVariant = "variant" => ButtonVariant::Primary,
        size: ButtonSize = "size" => ButtonSize::Medium,
        text_align: TextAlign = "textAlign" => TextAlign::Center,
        background_color: String = "backgroundColor" => "#2563eb",
        text_color: String = "textColor" => "#ffffff",
    }
);

props_record!(
    SpacerProps {
        height: f64 = "height" => 40.0,
        background_color: String = "backgroundColor" => "transparent",
    }
);

props_record!(
    /// `items` holds one `author|quote` entry per line
    TestimonialsProps {
        title: String = "title" => "What Our Customers Say",
        items: String = "items" => "Maria G.|Great quality and super fast shipping!\nCarlos R.|The best online store I have used.\nAna L.|Excellent customer service, highly recommended.",
        columns: i64 = "columns" => 3i64,
        background_color: String = "backgroundColor" => "#f9fafb",
        text_color: String = "textColor" => "#111827",
    }
);

props_record!(
    NewsletterProps {
        title: String = "title" => "Subscribe to Our Newsletter",
        subtitle: String = "subtitle" => "Get the latest updates and exclusive offers",
        placeholder: String = "placeholder" => "Enter your email",
        button_text: String = "buttonText" => "Subscribe",
        background_color: String = "backgroundColor" => "#1e293b",
        text_color: String = "textColor" => "#ffffff",
    }
);

props_record!(
    /// `items` holds one `title|description` entry per line
    FeaturesProps {
        title: String = "title" => "Why Choose Us",
        items: String = "items" => "Free Shipping|On all orders over $50\nSecure Payment|Your data is always protected\n24/7 Support|We are here to help",
        columns: i64 = "columns" => 3i64,
        background_color: String = "backgroundColor" => "#ffffff",
        text_color: String = "textColor" => "#111827",
    }
);

props_record!(
    /// `endDate` is an RFC 3339 timestamp; empty means no running sale
    CountdownProps {
        title: String = "title" => "Flash Sale Ends In",
        subtitle: String = "subtitle" => "Don't miss out on these deals",
        end_date: String = "endDate" => "",
        background_color: String = "backgroundColor" => "#dc2626",
        text_color: String = "textColor" => "#ffffff",
    }
);

props_record!(
    /// `images` holds comma- or newline-separated URLs
    GalleryProps {
        title: String = "title" => "Gallery",
        images: String = "images" => "",
        columns: i64 = "columns" => 3i64,
        gap: f64 = "gap" => 16.0,
        background_color: String = "backgroundColor" => "#ffffff",
    }
);

props_record!(
    ContactProps {
        title: String = "title" => "Contact Us",
        email: String = "email" => "contact@store.com",
        phone: String = "phone" => "+1 (555) 123-4567",
        address: String = "address" => "123 Commerce Street",
        show_form: bool = "showForm" => true,
        background_color: String = "backgroundColor" => "#ffffff",
        text_color: String = "textColor" => "#111827",
    }
);

props_record!(
    /// `items` holds one `question|answer` entry per line
    FaqProps {
        title: String = "title" => "Frequently Asked Questions",
        items: String = "items" => "How long does shipping take?|Orders arrive within 3-5 business days.\nCan I return a product?|Returns are accepted within 30 days of delivery.\nWhich payment methods do you accept?|Cards, bank transfers and cash payments at partner stores.",
        background_color: String = "backgroundColor" => "#ffffff",
        text_color: String = "textColor" => "#111827",
    }
);

props_record!(
    /// Page-builder layout box
    ContainerProps {
        content: String = "content" => "",
        padding: f64 = "padding" => 24.0,
        max_width: f64 = "maxWidth" => 1200.0,
        border_radius: f64 = "borderRadius" => 8.0,
        text_align: TextAlign = "textAlign" => TextAlign::Left,
        background_color: String = "backgroundColor" => "#ffffff",
        text_color: String = "textColor" => "#111827",
    }
);

macro_rules! component_props {
    ( $( $variant:ident => $record:ident ),* $(,)? ) => {
        /// Strongly-typed view of a component's properties
        #[derive(Debug, Clone, PartialEq)]
        pub enum ComponentProps {
            $( $variant($record), )*
        }

        impl ComponentProps {
            pub fn defaults(component_type: ComponentType) -> Self {
                match component_type {
                    $( ComponentType::$variant => ComponentProps::$variant($record::default()), )*
                }
            }

            pub fn from_bag(component_type: ComponentType, bag: &PropBag) -> Self {
                match component_type {
                    $( ComponentType::$variant => ComponentProps::$variant($record::from_bag(bag)), )*
                }
            }

            pub fn to_bag(&self) -> PropBag {
                match self {
                    $( ComponentProps::$variant(record) => record.to_bag(), )*
                }
            }

            pub fn component_type(&self) -> ComponentType {
                match self {
                    $( ComponentProps::$variant(_) => ComponentType::$variant, )*
                }
            }

            /// Bag keys the given type reads
            pub fn declared_keys(component_type: ComponentType) -> &'static [&'static str] {
                match component_type {
                    $( ComponentType::$variant => $record::KEYS, )*
                }
            }
        }
    };
}

component_props! {
    Hero => HeroProps,
    Categories => CategoriesProps,
    Products => ProductsProps,
    Banner => BannerProps,
    Text => TextProps,
    Image => ImageProps,
    Button => ButtonProps,
    Spacer => SpacerProps,
    Testimonials => TestimonialsProps,
    Newsletter => NewsletterProps,
    Features => FeaturesProps,
    Countdown => CountdownProps,
    Gallery => GalleryProps,
    Contact => ContactProps,
    Faq => FaqProps,
    Container => ContainerProps,
}

/// Splits a multi-line `a|b` list property into entries.
///
/// Blank lines are skipped; a line without a separator yields an empty
/// second field.
pub fn split_entries(raw: &str) -> Vec<(String, String)> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once('|') {
            Some((head, tail)) => (head.trim().to_string(), tail.trim().to_string()),
            None => (line.to_string(), String::new()),
        })
        .collect()
}

/// Splits a comma- or newline-separated list property
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c == '\n')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether a bag key holds a color value
pub fn is_color_key(key: &str) -> bool {
    key == "color" || key.ends_with("Color")
}

/// Keys holding navigation targets (`link`, `buttonLink`)
pub fn is_link_key(key: &str) -> bool {
    key == "link" || key.ends_with("Link")
}
