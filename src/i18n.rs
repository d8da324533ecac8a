//! Internationalization
//!
//! Display languages and their static label tables.

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Odia,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Odia];

    /// Two-letter code sent to the backend
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Odia => "or",
        }
    }

    /// Name of the language in its own script
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Odia => "ଓଡ଼ିଆ",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        let code = code.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// Match a BCP-47 tag such as `hi-IN` on its primary subtag
    pub fn from_tag(tag: &str) -> Option<Language> {
        let primary = tag.split(['-', '_']).next().unwrap_or("");
        Language::from_code(primary)
    }
}

/// Preferred language reported by the browser, if we support it
pub fn browser_language() -> Option<Language> {
    let tag = web_sys::window()?.navigator().language()?;
    Language::from_tag(&tag)
}

/// Static copy for one language
pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub search_placeholder: &'static str,
    pub language: &'static str,
    pub loading: &'static str,
    pub fetch_error: &'static str,
    pub no_results: &'static str,
    pub results: fn(usize) -> String,
    pub location: &'static str,
    pub main_uses: &'static str,
    pub physical: &'static str,
    pub species: &'static str,
    pub breeding_trait: &'static str,
    pub count: &'static str,
    pub nav_home: &'static str,
    pub nav_about: &'static str,
    pub nav_contact: &'static str,
}

// ========================
// Label Tables
// ========================

fn results_en(n: usize) -> String {
    match n {
        1 => "1 breed found".to_string(),
        n => format!("{} breeds found", n),
    }
}

fn results_hi(n: usize) -> String {
    format!("{} नस्लें मिलीं", n)
}

fn results_or(n: usize) -> String {
    format!("{}ଟି ପ୍ରଜାତି ମିଳିଲା", n)
}

static EN: Labels = Labels {
    title: "Explore Cow Breeds 🐄",
    subtitle: "Discover cow breeds from across the world. Search by name or location below.",
    search_placeholder: "Search cow breeds...",
    language: "Language",
    loading: "Loading breeds...",
    fetch_error: "❌ Could not fetch cow breeds. Try again later.",
    no_results: "No breeds found 🐄",
    results: results_en,
    location: "Location:",
    main_uses: "Main Uses:",
    physical: "Physical:",
    species: "Species:",
    breeding_trait: "Trait:",
    count: "Registered:",
    nav_home: "Home",
    nav_about: "About",
    nav_contact: "Contact",
};

static HI: Labels = Labels {
    title: "गाय की नस्लें खोजें 🐄",
    subtitle: "दुनिया भर की गाय की नस्लों के बारे में जानें। नीचे नाम या स्थान से खोजें।",
    search_placeholder: "गाय की नस्लें खोजें...",
    language: "भाषा",
    loading: "नस्लें लोड हो रही हैं...",
    fetch_error: "❌ गाय की नस्लें प्राप्त नहीं हो सकीं। बाद में पुनः प्रयास करें।",
    no_results: "कोई नस्ल नहीं मिली 🐄",
    results: results_hi,
    location: "स्थान:",
    main_uses: "मुख्य उपयोग:",
    physical: "शारीरिक विवरण:",
    species: "प्रजाति:",
    breeding_trait: "विशेषता:",
    count: "पंजीकृत संख्या:",
    nav_home: "होम",
    nav_about: "परिचय",
    nav_contact: "संपर्क",
};

static OR: Labels = Labels {
    title: "ଗାଈ ପ୍ରଜାତି ଅନ୍ୱେଷଣ କରନ୍ତୁ 🐄",
    subtitle: "ବିଶ୍ୱର ଗାଈ ପ୍ରଜାତି ବିଷୟରେ ଜାଣନ୍ତୁ। ତଳେ ନାମ କିମ୍ବା ସ୍ଥାନ ଦ୍ୱାରା ଖୋଜନ୍ତୁ।",
    search_placeholder: "ଗାଈ ପ୍ରଜାତି ଖୋଜନ୍ତୁ...",
    language: "ଭାଷା",
    loading: "ପ୍ରଜାତି ଲୋଡ୍ ହେଉଛି...",
    fetch_error: "❌ ଗାଈ ପ୍ରଜାତି ଆଣିହେଲା ନାହିଁ। ପରେ ପୁଣି ଚେଷ୍ଟା କରନ୍ତୁ।",
    no_results: "କୌଣସି ପ୍ରଜାତି ମିଳିଲା ନାହିଁ 🐄",
    results: results_or,
    location: "ସ୍ଥାନ:",
    main_uses: "ମୁଖ୍ୟ ବ୍ୟବହାର:",
    physical: "ଶାରୀରିକ ବିବରଣୀ:",
    species: "ପ୍ରଜାତି:",
    breeding_trait: "ବିଶେଷତା:",
    count: "ପଞ୍ଜୀକୃତ ସଂଖ୍ୟା:",
    nav_home: "ମୂଳପୃଷ୍ଠା",
    nav_about: "ବିଷୟରେ",
    nav_contact: "ଯୋଗାଯୋଗ",
};

/// Label table for a language
pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::English => &EN,
        Language::Hindi => &HI,
        Language::Odia => &OR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(" HI "), Some(Language::Hindi));
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(Language::from_tag("hi-IN"), Some(Language::Hindi));
        assert_eq!(Language::from_tag("or_IN"), Some(Language::Odia));
        assert_eq!(Language::from_tag("en"), Some(Language::English));
        assert_eq!(Language::from_tag("de-DE"), None);
        assert_eq!(Language::from_tag(""), None);
    }

    #[test]
    fn test_labels_per_language() {
        assert_eq!(labels(Language::English).search_placeholder, "Search cow breeds...");
        assert_ne!(labels(Language::Hindi).title, labels(Language::English).title);
        assert_ne!(labels(Language::Odia).title, labels(Language::Hindi).title);
    }

    #[test]
    fn test_result_count_text() {
        let en = labels(Language::English);
        assert_eq!((en.results)(1), "1 breed found");
        assert_eq!((en.results)(12), "12 breeds found");
        assert!((labels(Language::Hindi).results)(3).starts_with('3'));
    }
}
