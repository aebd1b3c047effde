use colored::Colorize;
use thiserror::Error;

pub struct Document {
    pub name: String,
}

impl Document {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DeviceError {
    #[error("{device} does not support {operation}")]
    Unsupported {
        device: &'static str,
        operation: &'static str,
    },
}

impl DeviceError {
    pub fn unsupported(device: &'static str, operation: &'static str) -> Self {
        Self::Unsupported { device, operation }
    }
}

// =============================================================================
// Milestone 1: One fat trait every device must answer for
// =============================================================================

/// Everything a machine might do. A trait cannot be instantiated, only
/// implemented, so there is no runtime "abstract class" guard to write; the
/// problem is what it forces on implementors.
pub trait Machine {
    fn print(&self, doc: &Document) -> Result<String, DeviceError>;
    fn scan(&self, doc: &Document) -> Result<String, DeviceError>;
    fn fax(&self, doc: &Document) -> Result<String, DeviceError>;
}

pub struct MultiFunctionPrinter;

impl Machine for MultiFunctionPrinter {
    fn print(&self, doc: &Document) -> Result<String, DeviceError> {
        Ok(format!("printed '{}'", doc.name))
    }

    fn scan(&self, doc: &Document) -> Result<String, DeviceError> {
        Ok(format!("scanned '{}'", doc.name))
    }

    fn fax(&self, doc: &Document) -> Result<String, DeviceError> {
        Ok(format!("faxed '{}'", doc.name))
    }
}

/// Forced to answer for capabilities it never had.
pub struct OldFashionedPrinter;

impl Machine for OldFashionedPrinter {
    fn print(&self, doc: &Document) -> Result<String, DeviceError> {
        Ok(format!("printed '{}'", doc.name))
    }

    fn scan(&self, _doc: &Document) -> Result<String, DeviceError> {
        Err(DeviceError::unsupported("OldFashionedPrinter", "scan"))
    }

    fn fax(&self, _doc: &Document) -> Result<String, DeviceError> {
        Err(DeviceError::unsupported("OldFashionedPrinter", "fax"))
    }
}

// =============================================================================
// Milestone 2: One trait per capability
// =============================================================================

// With the interfaces segregated no implementor stubs anything, so the
// error case disappears from the signatures.

pub trait Print {
    fn print(&self, doc: &Document) -> String;
}

pub trait Scan {
    fn scan(&self, doc: &Document) -> String;
}

pub trait Fax {
    fn fax(&self, doc: &Document) -> String;
}

pub struct SimplePrinter;

impl Print for SimplePrinter {
    fn print(&self, doc: &Document) -> String {
        format!("printed '{}'", doc.name)
    }
}

// =============================================================================
// Milestone 3: Composing capabilities instead of copying members
// =============================================================================

/// Implements exactly the two capabilities it has, as two small traits.
pub struct Photocopier;

impl Print for Photocopier {
    fn print(&self, doc: &Document) -> String {
        format!("photocopier printed '{}'", doc.name)
    }
}

impl Scan for Photocopier {
    fn scan(&self, doc: &Document) -> String {
        format!("photocopier scanned '{}'", doc.name)
    }
}

/// Holds one named field per capability it needs and delegates. Composition
/// replaces mixin member-copying.
pub struct MachineRoom {
    printer: Box<dyn Print>,
    scanner: Box<dyn Scan>,
}

impl MachineRoom {
    pub fn new(printer: Box<dyn Print>, scanner: Box<dyn Scan>) -> Self {
        Self { printer, scanner }
    }

    pub fn copy(&self, doc: &Document) -> String {
        let scanned = self.scanner.scan(doc);
        let printed = self.printer.print(doc);
        format!("{scanned}, then {printed}")
    }
}

fn main() {
    let doc = Document::new("quarterly-report.pdf");

    println!("{}", "=== The fat trait forces stubs ===".bold());
    let old_printer = OldFashionedPrinter;
    match old_printer.print(&doc) {
        Ok(msg) => println!("{} {msg}", "[ok]".green()),
        Err(err) => println!("{} {err}", "[err]".red()),
    }
    match old_printer.scan(&doc) {
        Ok(msg) => println!("{} {msg}", "[ok]".green()),
        Err(err) => println!("{} {err}", "[err]".red()),
    }
    match old_printer.fax(&doc) {
        Ok(msg) => println!("{} {msg}", "[ok]".green()),
        Err(err) => println!("{} {err}", "[err]".red()),
    }

    println!("\n{}", "=== Segregated capabilities ===".bold());
    let simple = SimplePrinter;
    println!("{}", simple.print(&doc));

    println!("\n{}", "=== Composition over mixins ===".bold());
    let room = MachineRoom::new(Box::new(Photocopier), Box::new(Photocopier));
    println!("{}", room.copy(&doc));
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_function_printer_supports_everything() {
        let doc = Document::new("doc");
        let machine = MultiFunctionPrinter;
        assert_eq!(machine.print(&doc).unwrap(), "printed 'doc'");
        assert_eq!(machine.scan(&doc).unwrap(), "scanned 'doc'");
        assert_eq!(machine.fax(&doc).unwrap(), "faxed 'doc'");
    }

    #[test]
    fn old_fashioned_printer_stubs_what_it_cannot_do() {
        let doc = Document::new("doc");
        let machine = OldFashionedPrinter;
        assert!(machine.print(&doc).is_ok());
        assert_eq!(
            machine.scan(&doc).unwrap_err(),
            DeviceError::unsupported("OldFashionedPrinter", "scan")
        );
        assert_eq!(
            machine.fax(&doc).unwrap_err().to_string(),
            "OldFashionedPrinter does not support fax"
        );
    }

    #[test]
    fn simple_printer_only_knows_printing() {
        let doc = Document::new("doc");
        let printer = SimplePrinter;
        assert_eq!(printer.print(&doc), "printed 'doc'");
    }

    #[test]
    fn photocopier_works_through_either_capability() {
        let doc = Document::new("doc");
        let printer: &dyn Print = &Photocopier;
        let scanner: &dyn Scan = &Photocopier;
        assert_eq!(printer.print(&doc), "photocopier printed 'doc'");
        assert_eq!(scanner.scan(&doc), "photocopier scanned 'doc'");
    }

    #[test]
    fn machine_room_delegates_to_its_parts() {
        let doc = Document::new("doc");
        let room = MachineRoom::new(Box::new(SimplePrinter), Box::new(Photocopier));
        assert_eq!(
            room.copy(&doc),
            "photocopier scanned 'doc', then printed 'doc'"
        );
    }
}
