//! MeCab 形式の素性文字列を Morpheme に射影する

use super::morpheme::Morpheme;

/// Number of leading part-of-speech columns shared by IPAdic and UniDic
const POS_COLUMNS: usize = 4;

/// Placeholder used by MeCab-format lexicons for an empty column
const EMPTY_FIELD: &str = "*";

/// Column positions of the fields read from a feature string.
///
/// | Lexicon | base form        | reading     |
/// |---------|------------------|-------------|
/// | IPAdic  | 6 (原形)         | 7 (読み)    |
/// | UniDic  | 7 (lemma)        | 20 (kana)   |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureLayout {
  /// Column of the dictionary (base) form
  pub base_index: usize,
  /// Column of the reading of the surface
  pub reading_index: usize,
  /// UniDic lemmas of loanwords carry the origin after a hyphen (`パン-pão`)
  pub strip_lemma_origin: bool,
}

impl FeatureLayout {
  /// IPAdic column layout
  pub const IPADIC: Self = Self {
    base_index: 6,
    reading_index: 7,
    strip_lemma_origin: false,
  };

  /// UniDic (CWJ / CSJ) column layout
  pub const UNIDIC: Self = Self {
    base_index: 7,
    reading_index: 20,
    strip_lemma_origin: true,
  };

  /// Builds a morpheme from a surface and its comma separated feature string.
  ///
  /// Missing, empty, or `*` columns are absent. An absent base form falls back to the
  /// surface, which is what unknown words get.
  pub fn morpheme(&self, surface: &str, feature: &str) -> Morpheme {
    let fields: Vec<&str> = feature.split(',').collect();

    let field = |idx: usize| -> Option<&str> {
      fields.get(idx).copied().filter(|s| !s.is_empty() && *s != EMPTY_FIELD)
    };

    let part_of_speech = fields
      .iter()
      .take(POS_COLUMNS)
      .filter(|s| !s.is_empty() && **s != EMPTY_FIELD)
      .map(|s| (*s).to_string())
      .collect();

    let base = field(self.base_index).map(|lemma| {
      if self.strip_lemma_origin {
        strip_origin(lemma)
      } else {
        lemma
      }
    });

    Morpheme {
      surface: surface.to_string(),
      normalized_form: base.unwrap_or(surface).to_string(),
      part_of_speech,
      reading_form: field(self.reading_index).map(str::to_string),
    }
  }
}

/// `パン-pão` → `パン`. A lemma that starts with the hyphen is kept as is.
fn strip_origin(lemma: &str) -> &str {
  match lemma.split_once('-') {
    Some((head, _)) if !head.is_empty() => head,
    _ => lemma,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ipadic_feature_full() {
    let m = FeatureLayout::IPADIC.morpheme("東京", "名詞,固有名詞,地域,一般,*,*,東京,トウキョウ,トーキョー");
    assert_eq!(m.surface, "東京");
    assert_eq!(m.normalized_form, "東京");
    assert_eq!(m.part_of_speech, vec!["名詞", "固有名詞", "地域", "一般"]);
    assert_eq!(m.reading_form.as_deref(), Some("トウキョウ"));
  }

  #[test]
  fn ipadic_conjugated_verb_uses_base_form() {
    let m = FeatureLayout::IPADIC.morpheme("食べ", "動詞,自立,*,*,一段,連用形,食べる,タベ,タベ");
    assert_eq!(m.normalized_form, "食べる");
    assert_eq!(m.part_of_speech, vec!["動詞", "自立"]);
    assert_eq!(m.reading_form.as_deref(), Some("タベ"));
  }

  #[test]
  fn unknown_word_falls_back_to_surface() {
    // IPAdic unknown words carry only seven columns with `*` as base form
    let m = FeatureLayout::IPADIC.morpheme("ほげ", "名詞,一般,*,*,*,*,*");
    assert_eq!(m.normalized_form, "ほげ");
    assert_eq!(m.reading_form, None);
  }

  #[test]
  fn short_feature_has_no_base_or_reading() {
    let m = FeatureLayout::IPADIC.morpheme("test", "名詞");
    assert_eq!(m.normalized_form, "test");
    assert_eq!(m.part_of_speech, vec!["名詞"]);
    assert_eq!(m.reading_form, None);
  }

  #[test]
  fn empty_feature_has_no_tags() {
    let m = FeatureLayout::UNIDIC.morpheme("x", "");
    assert!(m.part_of_speech.is_empty());
    assert_eq!(m.normalized_form, "x");
  }

  #[test]
  fn unidic_punctuation() {
    let m = FeatureLayout::UNIDIC.morpheme(
      "。",
      "補助記号,句点,*,*,*,*,*,。,。,*,。,*,記号,*,*,*,*,*,*,補助,*,*,*,*,*,*,*,6880571302400,25",
    );
    assert_eq!(m.normalized_form, "。");
    assert_eq!(m.part_of_speech, vec!["補助記号", "句点"]);
    assert_eq!(m.reading_form, None);
  }

  #[test]
  fn unidic_lemma_and_kana() {
    let feature = "動詞,一般,*,*,下一段-バ行,連用形-一般,タベル,食べる,食べ,タベ,食べる,タベル,和,*,*,*,*,*,*,用,タベ,タベル,タベ,タベル,2,C1,*,6373002396590592,23185";
    let m = FeatureLayout::UNIDIC.morpheme("食べ", feature);
    assert_eq!(m.normalized_form, "食べる");
    assert_eq!(m.reading_form.as_deref(), Some("タベ"));
    assert_eq!(m.part_of_speech, vec!["動詞", "一般"]);
  }

  #[test]
  fn unidic_loanword_origin_is_stripped() {
    let feature = "名詞,普通名詞,一般,*,*,*,パン,パン-pão,パン,パン,パン,パン,外,*,*,*,*,*,*,体,パン,パン,パン,パン,1,C1,*,8142686236959232,29623";
    let m = FeatureLayout::UNIDIC.morpheme("パン", feature);
    assert_eq!(m.normalized_form, "パン");
  }

  #[test]
  fn hyphen_only_lemma_is_kept() {
    assert_eq!(strip_origin("-"), "-");
    assert_eq!(strip_origin("ー"), "ー");
  }
}
