use leptos::prelude::*;

const LANGUAGE_STORAGE_KEY: &str = "language";

/// Display languages supported by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }

    pub fn toggled(self) -> Language {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

/// Language state provided at the application root.
#[derive(Clone, Copy)]
pub struct LanguageContext {
    pub language: ReadSignal<Language>,
    pub set_language: WriteSignal<Language>,
}

pub fn use_language() -> LanguageContext {
    expect_context::<LanguageContext>()
}

/// Read the saved language preference, defaulting to English.
pub fn load_language() -> Language {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(LANGUAGE_STORAGE_KEY).ok().flatten())
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

pub fn save_language(language: Language) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LANGUAGE_STORAGE_KEY, language.code());
    }
}

/// Set `<html lang>` and `<body dir>` to match the active language.
pub fn apply_direction(language: Language) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(html) = document.document_element() {
        let _ = html.set_attribute("lang", language.code());
    }
    if let Some(body) = document.body() {
        let _ = body.set_attribute("dir", if language.is_rtl() { "rtl" } else { "ltr" });
    }
}

/// Look up a translation key. Unknown keys are logged and echoed back so a
/// missing entry shows up in the UI instead of crashing it.
pub fn tr<'a>(language: Language, key: &'a str) -> &'a str {
    let Some((en, ar)) = lookup(key) else {
        log::warn!("translation key {key:?} not found");
        return key;
    };
    match language {
        Language::En => en,
        Language::Ar => ar,
    }
}

fn lookup(key: &str) -> Option<(&'static str, &'static str)> {
    let pair = match key {
        // Navigation
        "nav.home" => ("Home", "الرئيسية"),
        "nav.payHere" => ("Pay Here", "ادفع هنا"),
        "nav.login" => ("Login", "تسجيل الدخول"),
        "nav.register" => ("Register", "تسجيل جديد"),
        "nav.franchiseFactories" => ("Franchise", "الامتيازات"),
        "nav.factories" => ("Factories", "المصانع"),
        "nav.whoWeAre" => ("Who We Are", "من نحن"),
        "nav.howToUse" => ("How to Use the Website", "كيفية استخدام الموقع"),
        "nav.help" => ("Help", "المساعدة"),
        "nav.terms" => ("Terms & Conditions", "الشروط والأحكام"),
        "nav.privacy" => ("Privacy Policy", "سياسة الخصوصية"),
        "nav.contactUs" => ("Contact Us", "اتصل بنا"),
        "nav.more" => ("More", "المزيد"),

        // Franchise
        "franchise.requestFranchise" => ("Request Franchise", "طلب امتياز"),

        // Home page
        "home.title" => ("Factories Guide", "ابحث عن المصنع المثالي"),
        "home.subtitle" => (
            "Our website is your ultimate destination for comprehensive information on factories, providing reliable and up-to-date resources.",
            "موقعنا هو الوجهة النهائية للحصول على معلومات شاملة عن المصانع، حيث نقدم موارد موثوقة ومحدثة.",
        ),
        "home.subtitle2" => (
            "Whether you need to find a nearby factory, explore specialties and industrial services, or access contact details, our platform meets all your needs.",
            "سواء كنت بحاجة إلى العثور على مصنع قريب، استكشاف التخصصات والخدمات الصناعية، أو الحصول على تفاصيل الاتصال، فإن منصتنا تلبي جميع احتياجاتك.",
        ),

        // Filters
        "filters.country" => ("Country", "الدولة"),
        "filters.city" => ("City", "المدينة"),
        "filters.category" => ("Category", "التصنيف"),
        "filters.specialty" => ("Specialty", "التخصص"),
        "filters.search" => ("Search factories...", "بحث عن مصانع..."),
        "filters.apply" => ("Apply Filters", "تطبيق الفلاتر"),
        "filters.clear" => ("Clear Filters", "مسح الفلاتر"),
        "filters.quickFilters" => ("Quick filters", "فلاتر سريعة"),
        "filters.all" => ("All", "الكل"),
        "filters.searchLabel" => ("Search", "بحث"),
        "filters.popularCategories" => ("Popular Categories", "التصنيفات الشائعة"),
        "filters.popularCountries" => ("Popular Countries", "الدول الشائعة"),

        // Factory details
        "factory.workdays" => ("Working Days", "أيام العمل"),
        "factory.workingHours" => ("Working Hours", "ساعات العمل"),
        "factory.openNow" => ("Open Now", "مفتوح الآن"),
        "factory.closed" => ("Closed", "مغلق"),
        "factory.gallery" => ("Gallery", "معرض الصور"),
        "factory.products" => ("Products", "المنتجات"),
        "factory.about" => ("About", "عن المصنع"),
        "factory.services" => ("Services", "الخدمات"),
        "factory.booking" => ("Book a Visit", "حجز زيارة"),

        // Weekdays (working-hours dialog)
        "day.mon" => ("Monday", "الاثنين"),
        "day.tue" => ("Tuesday", "الثلاثاء"),
        "day.wed" => ("Wednesday", "الأربعاء"),
        "day.thu" => ("Thursday", "الخميس"),
        "day.fri" => ("Friday", "الجمعة"),
        "day.sat" => ("Saturday", "السبت"),
        "day.sun" => ("Sunday", "الأحد"),

        // Form labels
        "form.name" => ("Name", "الاسم"),
        "form.email" => ("Email", "البريد الإلكتروني"),
        "form.phone" => ("Phone Number", "رقم الهاتف"),
        "form.message" => ("Message", "الرسالة"),
        "form.submit" => ("Submit Request", "إرسال الطلب"),

        // Booking
        "booking.agreement" => (
            "I agree to the Terms and Conditions for booking a factory visit",
            "أوافق على الشروط والأحكام لحجز زيارة المصنع",
        ),
        "booking.agreementRequired" => (
            "You must accept the terms and conditions first",
            "يجب الموافقة على الشروط والأحكام أولاً",
        ),
        "booking.fillAllFields" => (
            "Please fill in all required fields",
            "يرجى ملء جميع الحقول المطلوبة",
        ),
        "booking.file" => ("File", "ملف"),
        "booking.fileTypes" => (
            "Accepted formats: PDF, DOC, DOCX, TXT",
            "الصيغ المقبولة: PDF, DOC, DOCX, TXT",
        ),
        "booking.success" => (
            "Your booking request has been sent.",
            "تم إرسال طلب الحجز الخاص بك.",
        ),
        "booking.submitError" => (
            "Failed to submit the booking request. Please try again.",
            "فشل في إرسال طلب الحجز. يرجى المحاولة مرة أخرى.",
        ),

        // Generic
        "common.viewDetails" => ("View Details", "عرض التفاصيل"),
        "common.cancel" => ("Cancel", "إلغاء"),
        "common.submitting" => ("Submitting...", "جاري الإرسال..."),
        "common.tryAgain" => ("Try Again", "حاول مرة أخرى"),
        "common.share" => ("Share", "مشاركة"),
        "common.copyLink" => ("Copy Link", "نسخ الرابط"),
        "common.linkCopied" => ("Link copied!", "تم نسخ الرابط!"),
        "common.noImages" => ("No images available", "لا توجد صور متاحة"),
        "common.noFactoriesFound" => (
            "No factories match your filters.",
            "لا توجد مصانع مطابقة للفلاتر.",
        ),

        // Rating
        "rating.title" => ("Rate this Factory", "قيم هذا المصنع"),
        "rating.submit" => ("Submit Rating", "إرسال التقييم"),
        "rating.success" => (
            "Thank you! Your rating has been submitted.",
            "شكراً لك! تم إرسال تقييمك.",
        ),
        "rating.emailPlaceholder" => ("Enter your email", "أدخل بريدك الإلكتروني"),
        "rating.fillAllFields" => (
            "Please select a rating and enter your email",
            "الرجاء اختيار تقييم وإدخال بريدك الإلكتروني",
        ),
        "rating.submitError" => (
            "Failed to submit rating. Please try again.",
            "فشل في إرسال التقييم. يرجى المحاولة مرة أخرى.",
        ),

        // Contact form
        "contact.submit" => ("Send Message", "إرسال الرسالة"),
        "contact.submitting" => ("Sending...", "جاري الإرسال..."),
        "contact.successMessage" => (
            "Thank you for your message. We will get back to you soon.",
            "شكراً لرسالتك. سنتواصل معك قريباً.",
        ),

        // Errors
        "errors.failedToLoad" => (
            "Failed to load factories.",
            "فشل في تحميل المصانع.",
        ),
        "errors.contentUnavailable" => (
            "Failed to load content.",
            "فشل في تحميل المحتوى.",
        ),

        // Footer
        "footer.rights" => ("All rights reserved.", "جميع الحقوق محفوظة."),

        _ => return None,
    };
    Some(pair)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_returns_language_variant() {
        assert_eq!(tr(Language::En, "filters.country"), "Country");
        assert_eq!(tr(Language::Ar, "filters.country"), "الدولة");
    }

    #[test]
    fn test_unknown_key_echoes_key() {
        assert_eq!(tr(Language::En, "no.such.key"), "no.such.key");
    }

    #[test]
    fn test_language_codes_round_trip() {
        assert_eq!(Language::from_code("ar"), Some(Language::Ar));
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::Ar.code(), "ar");
    }

    #[test]
    fn test_toggle_and_direction() {
        assert_eq!(Language::En.toggled(), Language::Ar);
        assert_eq!(Language::Ar.toggled(), Language::En);
        assert!(Language::Ar.is_rtl());
        assert!(!Language::En.is_rtl());
    }
}
