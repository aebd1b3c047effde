use colored::Colorize;

// =============================================================================
// Milestone 1: A subtype that breaks its base contract
// =============================================================================

/// A shape whose dimensions can be changed independently. That last word is
/// the contract clients rely on.
pub trait ResizableShape {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_width(&mut self, width: u32);
    fn set_height(&mut self, height: u32);

    fn area(&self) -> u32 {
        self.width() * self.height()
    }
}

#[derive(Debug)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl ResizableShape for Rectangle {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    fn set_height(&mut self, height: u32) {
        self.height = height;
    }
}

#[derive(Debug)]
pub struct Square {
    side: u32,
}

impl Square {
    pub fn new(side: u32) -> Self {
        Self { side }
    }
}

impl ResizableShape for Square {
    fn width(&self) -> u32 {
        self.side
    }

    fn height(&self) -> u32 {
        self.side
    }

    // Both setters change both dimensions to keep the square square, which
    // silently rewrites the trait's contract.
    fn set_width(&mut self, width: u32) {
        self.side = width;
    }

    fn set_height(&mut self, height: u32) {
        self.side = height;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StretchOutcome {
    pub expected: u32,
    pub actual: u32,
}

impl StretchOutcome {
    pub fn holds(&self) -> bool {
        self.expected == self.actual
    }
}

/// What any client reasonably does with a resizable shape: change one
/// dimension and expect the other to stay put.
pub fn stretch_height(shape: &mut dyn ResizableShape, new_height: u32) -> StretchOutcome {
    let width = shape.width();
    shape.set_height(new_height);
    StretchOutcome {
        expected: width * new_height,
        actual: shape.area(),
    }
}

// =============================================================================
// Milestone 2: Say what you mean with the type
// =============================================================================

/// The honest model: a square is not a rectangle you can stretch. Stretching
/// any shape yields a rectangle, and the return type says so.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rectangle { width: u32, height: u32 },
    Square { side: u32 },
}

impl Shape {
    pub fn width(&self) -> u32 {
        match self {
            Shape::Rectangle { width, .. } => *width,
            Shape::Square { side } => *side,
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Shape::Rectangle { height, .. } => *height,
            Shape::Square { side } => *side,
        }
    }

    pub fn area(&self) -> u32 {
        self.width() * self.height()
    }

    /// Resizing one dimension always produces a rectangle; a square does not
    /// survive a one-dimensional stretch.
    pub fn with_height(&self, height: u32) -> Shape {
        Shape::Rectangle {
            width: self.width(),
            height,
        }
    }
}

pub fn total_area(shapes: &[Shape]) -> u32 {
    shapes.iter().map(Shape::area).sum()
}

fn report(label: &str, outcome: StretchOutcome) {
    let verdict = if outcome.holds() {
        "ok".green()
    } else {
        "contract broken".red()
    };
    println!(
        "{label}: expected area {}, got {} [{verdict}]",
        outcome.expected, outcome.actual
    );
}

fn main() {
    println!("{}", "=== Substituting a square for a rectangle ===".bold());
    let mut rectangle = Rectangle::new(2, 3);
    report("Rectangle(2x3)", stretch_height(&mut rectangle, 10));

    let mut square = Square::new(5);
    report("Square(5)", stretch_height(&mut square, 10));

    println!("\n{}", "=== The honest model ===".bold());
    let shapes = [
        Shape::Rectangle {
            width: 2,
            height: 3,
        },
        Shape::Square { side: 5 },
    ];
    for shape in &shapes {
        println!("{shape:?} has area {}", shape.area());
    }
    println!("total area: {}", total_area(&shapes));

    let stretched = Shape::Square { side: 5 }.with_height(10);
    println!("a stretched square becomes {stretched:?}");
}

// =============================================================================
// Tests
// =============================================================================
