use colored::Colorize;
use solid_principles::specification::{all_of, filter, Specification};
use std::fmt;

// =============================================================================
// Milestone 1: A filter that must change for every new criterion
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Small,
    Medium,
    Large,
    Yuge,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    pub fn new(name: &str, color: Color, size: Size) -> Self {
        Self {
            name: name.to_string(),
            color,
            size,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One method per criteria combination. Three criteria already need seven
/// methods; every new criterion reopens this type.
pub struct ProductFilter;

impl ProductFilter {
    pub fn by_color<'a>(&self, products: &'a [Product], color: Color) -> Vec<&'a Product> {
        products.iter().filter(|p| p.color == color).collect()
    }

    pub fn by_size<'a>(&self, products: &'a [Product], size: Size) -> Vec<&'a Product> {
        products.iter().filter(|p| p.size == size).collect()
    }

    pub fn by_size_and_color<'a>(
        &self,
        products: &'a [Product],
        size: Size,
        color: Color,
    ) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|p| p.size == size && p.color == color)
            .collect()
    }
}

// =============================================================================
// Milestone 2: Criteria as specifications
// =============================================================================

pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }
}

pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }
}

fn sample_products() -> Vec<Product> {
    vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
    ]
}

fn main() {
    let products = sample_products();

    println!("{}", "=== The old way: one method per criterion ===".bold());
    let old_filter = ProductFilter;
    println!("Green products (old):");
    for product in old_filter.by_color(&products, Color::Green) {
        println!(" * {} is {}", product, "green".green());
    }

    println!(
        "\n{}",
        "=== The specification pattern: filter stays closed ===".bold()
    );
    println!("Green products (new):");
    for product in filter(&products, &ColorSpecification::new(Color::Green)) {
        println!(" * {} is {}", product, "green".green());
    }

    println!("Large products:");
    for product in filter(&products, &SizeSpecification::new(Size::Large)) {
        println!(" * {} is large", product);
    }

    println!("\n{}", "=== Combining criteria ===".bold());
    let green_and_large = all_of(vec![
        Box::new(ColorSpecification::new(Color::Green)),
        Box::new(SizeSpecification::new(Size::Large)),
    ]);
    println!("Large and green products:");
    for product in filter(&products, &green_and_large) {
        println!(" * {} is large and {}", product, "green".green());
    }

    // A new criterion needs no new type at all.
    let name_starts_with_h = |p: &Product| p.name.starts_with('H');
    println!("Products starting with 'H':");
    for product in filter(&products, &name_starts_with_h) {
        println!(" * {}", product);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use solid_principles::specification::AndSpecification;

    fn names(selected: &[&Product]) -> Vec<String> {
        selected.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn color_specification_selects_green_products() {
        let products = sample_products();
        let selected = filter(&products, &ColorSpecification::new(Color::Green));
        assert_eq!(names(&selected), vec!["Apple", "Tree"]);
    }

    #[test]
    fn size_specification_selects_large_products() {
        let products = sample_products();
        let selected = filter(&products, &SizeSpecification::new(Size::Large));
        assert_eq!(names(&selected), vec!["Tree", "House"]);
    }

    #[test]
    fn combined_specification_selects_green_and_large() {
        let products = sample_products();
        let spec = all_of(vec![
            Box::new(ColorSpecification::new(Color::Green)),
            Box::new(SizeSpecification::new(Size::Large)),
        ]);
        let selected = filter(&products, &spec);
        assert_eq!(names(&selected), vec!["Tree"]);
    }

    #[test]
    fn conjunction_matches_pairwise_and_for_every_product() {
        let products = sample_products();
        let green = ColorSpecification::new(Color::Green);
        let large = SizeSpecification::new(Size::Large);
        let both = AndSpecification::new()
            .with(ColorSpecification::new(Color::Green))
            .with(SizeSpecification::new(Size::Large));
        for product in &products {
            assert_eq!(
                both.is_satisfied(product),
                green.is_satisfied(product) && large.is_satisfied(product),
                "product {}",
                product.name
            );
        }
    }

    #[test]
    fn old_and_new_filters_agree() {
        let products = sample_products();
        let old_filter = ProductFilter;
        assert_eq!(
            names(&old_filter.by_color(&products, Color::Green)),
            names(&filter(&products, &ColorSpecification::new(Color::Green)))
        );
        assert_eq!(
            names(&old_filter.by_size(&products, Size::Large)),
            names(&filter(&products, &SizeSpecification::new(Size::Large)))
        );
        let combined = all_of(vec![
            Box::new(ColorSpecification::new(Color::Green)),
            Box::new(SizeSpecification::new(Size::Large)),
        ]);
        assert_eq!(
            names(&old_filter.by_size_and_color(&products, Size::Large, Color::Green)),
            names(&filter(&products, &combined))
        );
    }

    #[test]
    fn a_closure_is_a_criterion_without_a_new_type() {
        let products = sample_products();
        let medium_or_larger = |p: &Product| !matches!(p.size, Size::Small);
        let selected = filter(&products, &medium_or_larger);
        assert_eq!(names(&selected), vec!["Tree", "House"]);
    }

    #[test]
    fn filtering_an_already_filtered_list_is_a_no_op() {
        let products = sample_products();
        let green = ColorSpecification::new(Color::Green);
        let once: Vec<Product> = filter(&products, &green).into_iter().cloned().collect();
        let twice = filter(&once, &green);
        assert_eq!(twice.len(), once.len());
        assert_eq!(names(&twice), vec!["Apple", "Tree"]);
    }
}
