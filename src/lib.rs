//! Teaching examples for the five SOLID design principles, one binary per
//! principle (see `src/bin/`). The binaries are self-contained demos; the one
//! reusable piece is the specification filter in [`specification`], which the
//! open/closed example builds on.

pub mod specification;
