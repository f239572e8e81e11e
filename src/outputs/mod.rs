//! Output generation.
//!
//! - [`html`]: renders the assembled `Document` and writes it to disk
//!
//! ```text
//! <!DOCTYPE html>
//! <html>
//!   <head><title/><style/></head>
//!   <body>
//!     <h1/>
//!     <section><h2 class="shaded"/><p/></section>   (one per article)
//!   </body>
//! </html>
//! ```

pub mod html;
