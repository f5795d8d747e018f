/// Extract a short type name from the full module path.
///
/// Given `"basket_pipeline::components::PriceBandFilter"`, returns
/// `"PriceBandFilter"`. Generic arguments are not stripped.
pub fn short_type_name(full: &str) -> &str {
    let path = full.split('<').next().unwrap_or(full);
    let short = path.rsplit("::").next().unwrap_or(path);
    &full[path.len() - short.len()..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_module_path() {
        assert_eq!(short_type_name("a::b::ZeroQuantityFilter"), "ZeroQuantityFilter");
        assert_eq!(short_type_name("Plain"), "Plain");
    }

    #[test]
    fn keeps_generic_arguments() {
        assert_eq!(short_type_name("a::b::Wrapper<c::Inner>"), "Wrapper<c::Inner>");
    }
}
