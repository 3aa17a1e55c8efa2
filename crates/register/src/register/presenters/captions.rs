use super::translations::Translations;

/// Chooses between singular and plural keys purely on `count == 1` and
/// interpolates `{count}`.
pub fn result_caption(
    count: usize,
    singular_key: &str,
    plural_key: &str,
    translations: &Translations,
) -> String {
    let key = if count == 1 { singular_key } else { plural_key };
    translations.get(key).replace("{count}", &count.to_string())
}
