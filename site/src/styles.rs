//! CSS for the landing page.
//!
//! The markup keeps Tailwind-style utility class names. [`PAGE_CSS`]
//! implements exactly the utilities the components use, so a rendered page
//! looks right offline with no Tailwind build step.
//!
//! # Customization
//!
//! ```rust
//! use seagro_site::styles::PAGE_CSS;
//!
//! let my_css = ".feature-card { border: 1px solid #e5e7eb; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! assert!(combined.ends_with("}"));
//! ```
//!
//! Breakpoints follow Tailwind: `sm` 640px, `md` 768px, `lg` 1024px.

/// Complete stylesheet for the landing page.
///
/// Must stay free of `<`, `>` and `&`: it is emitted as the text of a
/// `<style>` element. Horizontal spacing utilities therefore use flex `gap`
/// rather than child combinators.
pub const PAGE_CSS: &str = r#"
*, ::before, ::after { box-sizing: border-box; border: 0 solid #e5e7eb; }
html { line-height: 1.5; -webkit-text-size-adjust: 100%; font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif; }
body { margin: 0; }
h1, h2, h3, p, ul { margin: 0; }
ul { list-style: none; padding: 0; }
button { font: inherit; color: inherit; background: transparent; cursor: pointer; padding: 0; }
svg { display: block; flex-shrink: 0; }

/* layout */
.relative { position: relative; }
.absolute { position: absolute; }
.bottom-0 { bottom: 0; }
.left-0 { left: 0; }
.right-0 { right: 0; }
.hidden { display: none; }
.flex { display: flex; }
.grid { display: grid; }
.items-center { align-items: center; }
.justify-between { justify-content: space-between; }
.justify-center { justify-content: center; }
.grid-cols-1 { grid-template-columns: repeat(1, minmax(0, 1fr)); }
.gap-8 { gap: 2rem; }
.space-x-1 { column-gap: 0.25rem; }
.space-x-2 { column-gap: 0.5rem; }
.space-x-4 { column-gap: 1rem; }
.space-x-6 { column-gap: 1.5rem; }
.space-y-2 li + li { margin-top: 0.5rem; }
.min-h-screen { min-height: 100vh; }
.max-w-7xl { max-width: 80rem; }
.mx-auto { margin-left: auto; margin-right: auto; }
.h-4 { height: 1rem; }
.w-4 { width: 1rem; }
.h-6 { height: 1.5rem; }
.w-6 { width: 1.5rem; }
.h-12 { height: 3rem; }
.w-12 { width: 3rem; }
.h-16 { height: 4rem; }
.w-16 { width: 4rem; }

/* spacing */
.p-6 { padding: 1.5rem; }
.px-4 { padding-left: 1rem; padding-right: 1rem; }
.px-8 { padding-left: 2rem; padding-right: 2rem; }
.py-2 { padding-top: 0.5rem; padding-bottom: 0.5rem; }
.py-3 { padding-top: 0.75rem; padding-bottom: 0.75rem; }
.py-12 { padding-top: 3rem; padding-bottom: 3rem; }
.py-24 { padding-top: 6rem; padding-bottom: 6rem; }
.pt-8 { padding-top: 2rem; }
.mt-8 { margin-top: 2rem; }
.mb-2 { margin-bottom: 0.5rem; }
.mb-4 { margin-bottom: 1rem; }
.mb-6 { margin-bottom: 1.5rem; }
.mb-8 { margin-bottom: 2rem; }
.mb-16 { margin-bottom: 4rem; }

/* typography */
.text-center { text-align: center; }
.text-sm { font-size: 0.875rem; line-height: 1.25rem; }
.text-lg { font-size: 1.125rem; line-height: 1.75rem; }
.text-xl { font-size: 1.25rem; line-height: 1.75rem; }
.text-3xl { font-size: 1.875rem; line-height: 2.25rem; }
.text-4xl { font-size: 2.25rem; line-height: 2.5rem; }
.font-semibold { font-weight: 600; }
.font-bold { font-weight: 700; }
.text-white { color: #ffffff; }
.text-gray-400 { color: #9ca3af; }
.text-gray-600 { color: #4b5563; }
.text-gray-900 { color: #111827; }
.text-blue-100 { color: #dbeafe; }
.text-blue-600 { color: #2563eb; }
.cursor-pointer { cursor: pointer; }

/* surfaces */
.bg-white { background-color: #ffffff; }
.bg-gray-50 { background-color: #f9fafb; }
.bg-gray-900 { background-color: #111827; }
.bg-blue-600 { background-color: #2563eb; }
.bg-gradient-to-r.from-blue-600.to-blue-800 { background-image: linear-gradient(to right, #2563eb, #1e40af); }
.bg-gradient-to-t.from-white.to-transparent { background-image: linear-gradient(to top, #ffffff, rgba(255, 255, 255, 0)); }
.rounded-lg { border-radius: 0.5rem; }
.rounded-xl { border-radius: 0.75rem; }
.border-2 { border-width: 2px; }
.border-white { border-color: #ffffff; }
.border-t { border-top-width: 1px; }
.border-gray-800 { border-color: #1f2937; }
.shadow-md { box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1); }
.shadow-lg { box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1); }

/* interaction */
.transition-colors { transition: color 150ms, background-color 150ms, border-color 150ms; }
.transition-shadow { transition: box-shadow 150ms; }
.hover\:text-blue-600:hover { color: #2563eb; }
.hover\:bg-blue-50:hover { background-color: #eff6ff; }
.hover\:bg-blue-700:hover { background-color: #1d4ed8; }
.hover\:bg-white:hover { background-color: #ffffff; }
.hover\:shadow-lg:hover { box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1); }

@media (min-width: 640px) {
    .sm\:px-6 { padding-left: 1.5rem; padding-right: 1.5rem; }
}

@media (min-width: 768px) {
    .md\:flex { display: flex; }
    .md\:grid-cols-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    .md\:grid-cols-4 { grid-template-columns: repeat(4, minmax(0, 1fr)); }
    .md\:text-2xl { font-size: 1.5rem; line-height: 2rem; }
    .md\:text-6xl { font-size: 3.75rem; line-height: 1; }
}

@media (min-width: 1024px) {
    .lg\:px-8 { padding-left: 2rem; padding-right: 2rem; }
    .lg\:grid-cols-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
}
"#;

#[cfg(test)]
mod tests {
    use super::PAGE_CSS;

    #[test]
    fn safe_as_style_text() {
        assert!(!PAGE_CSS.contains('<'));
        assert!(!PAGE_CSS.contains('>'));
        assert!(!PAGE_CSS.contains('&'));
    }

    #[test]
    fn braces_balance() {
        assert_eq!(PAGE_CSS.matches('{').count(), PAGE_CSS.matches('}').count());
    }

    #[test]
    fn covers_responsive_utilities() {
        for class in [
            r".md\:flex",
            r".md\:grid-cols-2",
            r".lg\:grid-cols-3",
            r".md\:grid-cols-4",
        ] {
            assert!(PAGE_CSS.contains(class), "{class}");
        }
    }
}
