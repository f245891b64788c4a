//! Template logical paths → concrete output paths.

/// Placeholder segment embedded in template logical paths.
const NAME_TOKEN: &str = "NAME";

/// Authoring suffix that marks an asset as a renderable template. Entries
/// without it are partials/includes.
pub(crate) const TEMPLATE_SUFFIX: &str = ".rstemplate";

/// Suffix templates are rewritten to in output paths.
const SOURCE_SUFFIX: &str = ".rs";

/// Map a template's logical path to its output path for a package.
///
/// Every `NAME` occurrence is replaced with the package name, and a trailing
/// `.rstemplate` is rewritten to `.rs`. Paths without the template suffix
/// pass through with token substitution only.
pub fn template_path_to_output(template_path: &str, package_name: &str) -> String {
    let substituted = template_path.replace(NAME_TOKEN, package_name);
    match substituted.strip_suffix(TEMPLATE_SUFFIX) {
        Some(stem) => format!("{stem}{SOURCE_SUFFIX}"),
        None => substituted,
    }
}

/// Whether a logical path names a renderable template (vs a partial).
pub fn is_renderable(template_path: &str) -> bool {
    template_path.ends_with(TEMPLATE_SUFFIX)
}
