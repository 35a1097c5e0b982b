//! 表示名・ネームスペースの導出

/// パスからファイル名を取り出す（`/` と `\` の両方を区切りとして扱う）
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// 拡張子を除いたファイル名
pub fn file_stem(path: &str) -> &str {
    let name = file_name(path);
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// 拡張子（ドットなし、なければNone）
pub fn extension(path: &str) -> Option<&str> {
    let name = file_name(path);
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
        _ => None,
    }
}

/// スロットのラベル表示名
///
/// アンダースコアを含む場合は空白に置換して各単語をタイトルケースにする。
/// 含まない場合はファイル名（拡張子なし）をそのまま返す。
pub fn display_name(path: &str) -> String {
    let stem = file_stem(path);
    if stem.contains('_') {
        title_case(&stem.replace('_', " "))
    } else {
        stem.to_string()
    }
}

/// 大文字・小文字の区別がある文字か（漢字や数字は区別なし）
fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase() || c.to_uppercase().ne(c.to_lowercase())
}

/// 大文字・小文字の区別がある文字の連続の先頭を大文字、それ以外を小文字にする
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;

    for c in text.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = is_cased(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_with_underscores() {
        assert_eq!(display_name("render_final_v2"), "Render Final V2");
        assert_eq!(display_name("C:/scripts/render_final_v2.py"), "Render Final V2");
    }

    #[test]
    fn test_display_name_without_underscores() {
        assert_eq!(display_name("renderfinal"), "renderfinal");
        assert_eq!(display_name("C:/scripts/renderFinal.mel"), "renderFinal");
    }

    #[test]
    fn test_display_name_unassigned_key() {
        assert_eq!(display_name("Action 1"), "Action 1");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("LIGHT rig"), "Light Rig");
        assert_eq!(title_case("3d model"), "3D Model");
    }

    #[test]
    fn test_title_case_after_uncased_letter() {
        assert_eq!(title_case("背景light rig"), "背景Light Rig");
        assert_eq!(display_name("D:/scenes/夜set_forest.ma"), "夜Set Forest");
    }

    #[test]
    fn test_file_stem_and_extension() {
        assert_eq!(file_stem("C:/assets/char_hero.mb"), "char_hero");
        assert_eq!(file_stem("C:\\assets\\prop.v1.ma"), "prop.v1");
        assert_eq!(file_stem(".hidden"), ".hidden");
        assert_eq!(extension("C:/assets/char_hero.mb"), Some("mb"));
        assert_eq!(extension("C:/assets/README"), None);
        assert_eq!(extension(".hidden"), None);
    }
}
