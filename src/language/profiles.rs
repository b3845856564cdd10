//! Static per-locale profile tables
//!
//! Rule order is priority order: greetings before topical rules, topical
//! rules before the generic scheme rule. The catch-all and fallback strings
//! are complete sentences in the profile's own language.
//!
//! Punjabi carries extra recognition/synthesis candidates and voice hints
//! because platform support for `pa-*` tags is inconsistent; Hindi is its
//! terminal fallback.

use super::{KeywordRule, LanguageProfile, VoiceFallback};

/// All supported locale profiles; the first entry is the default (English)
pub const PROFILES: &[LanguageProfile] = &[ENGLISH, HINDI, BENGALI, TAMIL, PUNJABI, MALAYALAM];

const NO_VOICE_HINTS: VoiceFallback = VoiceFallback {
    name_hints: &[],
    alternate_prefixes: &[],
    region_suffix: Some("-in"),
    vendor_hints: &["google"],
};

const ENGLISH: LanguageProfile = LanguageProfile {
    locale_id: "en",
    english_name: "English",
    recognition_locales: &["en-IN"],
    synthesis_locales: &["en-US"],
    rules: &[
        KeywordRule {
            triggers: &["hello", "hi ", "hey", "greetings"],
            response: "Hello! I can help you learn about government schemes. What kind of schemes are you interested in?",
        },
        KeywordRule {
            triggers: &["health", "medical", "hospital", "doctor"],
            response: "You may be eligible for Ayushman Bharat which provides health insurance coverage up to ₹5 lakh per family per year. Would you like to know more about health schemes?",
        },
        KeywordRule {
            triggers: &["education", "school", "college", "student"],
            response: "There are several education schemes like scholarships for students. The PM Vidya scheme provides financial assistance for higher education. Would you like to know more?",
        },
        KeywordRule {
            triggers: &["farmer", "agriculture", "farming", "crop", "farm"],
            response: "As a farmer, you may be eligible for PM-KISAN which provides income support of ₹6,000 per year. There are also schemes for crop insurance and subsidized equipment.",
        },
        KeywordRule {
            triggers: &["house", "home", "housing", "accommodation"],
            response: "PM Awas Yojana provides housing assistance for low-income families. You may be eligible for subsidies on home loans or direct financial assistance.",
        },
        KeywordRule {
            triggers: &["job", "employment", "work", "career"],
            response: "There are employment schemes like PMKVY for skill development and job training. MUDRA Yojana provides loans for small businesses and entrepreneurs.",
        },
        KeywordRule {
            triggers: &["women", "child", "girl", "mother"],
            response: "Schemes for women and children include Beti Bachao Beti Padhao and Sukanya Samriddhi Yojana for girl child education and welfare.",
        },
    ],
    catch_all: "I can help you find government schemes in categories like health, education, agriculture, housing, employment, and women & child welfare. Could you specify which area you're interested in?",
    fallback_response: "I'm sorry, I didn't understand your question. Please ask about topics like health, education, agriculture, housing, employment, or women & child welfare.",
    limited_platform_support: false,
    voice_fallback: NO_VOICE_HINTS,
};

const HINDI: LanguageProfile = LanguageProfile {
    locale_id: "hi",
    english_name: "Hindi",
    recognition_locales: &["hi-IN"],
    synthesis_locales: &["hi-IN"],
    rules: &[
        KeywordRule {
            triggers: &["नमस्ते", "नमस्कार", "हैलो", "hello"],
            response: "नमस्ते! मैं आपकी सरकारी योजनाओं के बारे में जानकारी पाने में मदद कर सकता हूँ। आप किस तरह की योजनाओं के बारे में जानना चाहते हैं?",
        },
        KeywordRule {
            triggers: &["स्वास्थ्य", "चिकित्सा", "health", "बीमारी", "अस्पताल", "डॉक्टर", "medical", "hospital"],
            response: "आप आयुष्मान भारत के लिए पात्र हो सकते हैं जो प्रति परिवार प्रति वर्ष ₹5 लाख तक का स्वास्थ्य बीमा कवरेज प्रदान करता है। क्या आप स्वास्थ्य योजनाओं के बारे में और जानना चाहेंगे?",
        },
        KeywordRule {
            triggers: &["शिक्षा", "विद्यालय", "कॉलेज", "education", "पढ़ाई", "स्कूल", "school", "college"],
            response: "छात्रों के लिए कई शिक्षा योजनाएँ जैसे छात्रवृत्ति उपलब्ध हैं। पीएम विद्या योजना उच्च शिक्षा के लिए वित्तीय सहायता प्रदान करती है। क्या आप और जानना चाहेंगे?",
        },
        KeywordRule {
            triggers: &["किसान", "कृषि", "खेती", "farmer", "फसल", "agriculture", "farming"],
            response: "एक किसान के रूप में, आप पीएम-किसान के लिए पात्र हो सकते हैं जो प्रति वर्ष ₹6,000 का स्वास्थ्य बीमा कवरेज प्रदान करता है। फसल बीमा और सब्सिडी वाले उपकरणों के लिए भी योजनाएँ हैं।",
        },
        KeywordRule {
            triggers: &["घर", "आवास", "मकान", "house", "गृह", "housing", "home"],
            response: "पीएम आवास योजना कम आय वाले परिवारों के लिए आवास सहायता प्रदान करती है। आप गृह ऋण पर सब्सिडी या प्रत्यक्ष वित्तीय सहायता के लिए पात्र हो सकते हैं।",
        },
        KeywordRule {
            triggers: &["नौकरी", "रोजगार", "काम", "job", "व्यवसाय", "employment", "work"],
            response: "कौशल विकास और नौकरी प्रशिक्षण के लिए पीएमकेवीवाई जैसी रोजगार योजनाएँ हैं। मुद्रा योजना छोटे व्यवसायों और उद्यमियों के लिए ऋण प्रदान करती है।",
        },
        KeywordRule {
            triggers: &["महिला", "बच्चा", "बेटी", "women", "child", "लड़की", "girl"],
            response: "महिलाओं और बच्चों के लिए योजनाओं में बेटी बचाओ बेटी पढाओ और बालिका शिक्षा और कल्याण के लिए सुकन्या समृद्धि योजना शामिल हैं।",
        },
        KeywordRule {
            triggers: &["योजना", "scheme", "government", "सरकार", "सरकारी", "सुनो और जानो"],
            response: "भारत सरकार द्वारा विभिन्न श्रेणियों में कई योजनाएँ प्रदान की जाती हैं। आप किस विशेष क्षेत्र में सहायता चाहते हैं? स्वास्थ्य, शिक्षा, कृषि, आवास, रोजगार या महिला एवं बाल कल्याण के बारे में पूछ सकते हैं।",
        },
    ],
    catch_all: "मैं आपको स्वास्थ्य, शिक्षा, कृषि, आवास, रोजगार और महिला एवं बाल कल्याण जैसे क्षेत्रों में सरकारी योजनाएँ खोजने में मदद कर सकता हूँ। क्या आप बता सकते हैं कि आप किस क्षेत्र में रुचि रखते हैं?",
    fallback_response: "मुझे क्षमा करें, मैं आपके प्रश्न को समझ नहीं पाया। कृपया स्वास्थ्य, शिक्षा, कृषि, आवास, रोजगार या महिला एवं बाल कल्याण जैसे विषयों के बारे में पूछें।",
    limited_platform_support: false,
    voice_fallback: NO_VOICE_HINTS,
};

const BENGALI: LanguageProfile = LanguageProfile {
    locale_id: "bn",
    english_name: "Bengali",
    recognition_locales: &["bn-IN"],
    synthesis_locales: &["bn-IN"],
    rules: &[
        KeywordRule {
            triggers: &["স্বাস্থ্য", "চিকিত্সা", "health"],
            response: "আপনি আয়ুষ্মান ভারতের জন্য যোগ্য হতে পারেন যা প্রতি পরিবারকে প্রতি বছর ₹5 লক্ষ পর্যন্ত স্বাস্থ্য বীমা কভারেজ প্রদান করে। আপনি কি স্বাস্থ্য প্রকল্পগুলি সম্পর্কে আরও জানতে চান?",
        },
        KeywordRule {
            triggers: &["শিক্ষা", "স্কুল", "কলেজ", "education"],
            response: "ছাত্রদের জন্য বৃত্তির মতো বেশ কয়েকটি শিক্ষা প্রকল্প রয়েছে। পিএম বিদ্যা প্রকল্প উচ্চ শিক্ষার জন্য আর্থিক সহায়তা প্রদান করে। আপনি কি আরও জানতে চান?",
        },
        KeywordRule {
            triggers: &["কৃষক", "কৃষি", "চাষ", "farmer"],
            response: "একজন কৃষক হিসাবে, আপনি পিএম-কিষাণের জন্য যোগ্য হতে পারেন যা বছরে ₹6,000 আয় সহায়তা প্রদান করে। ফসল বীমা এবং ভর্তুকি প্রাপ্ত সরঞ্জামের জন্যও প্রকল্প রয়েছে।",
        },
        KeywordRule {
            triggers: &["বাড়ি", "আবাসন", "ঘর", "house"],
            response: "পিএম আবাস যোজনা কম আয়ের পরিবারের জন্য আবাসন সহায়তা প্রদান করে। আপনি হোম লোনে ভর্তুকি বা সরাসরি আর্থিক সহায়তার জন্য যোগ্য হতে পারেন।",
        },
        KeywordRule {
            triggers: &["চাকরি", "কর্মসংস্থান", "কাজ", "job"],
            response: "দক্ষতা উন্নয়ন এবং কাজের প্রশিক্ষণের জন্য পিএমকেভিওয়াইয়ের মতো কর্মসংস্থান প্রকল্প রয়েছে। মুদ্রা যোজনা ক্ষুদ্র ব্যবসা এবং উদ্যোক্তাদের জন্য ঋণ প্রদান করে।",
        },
        KeywordRule {
            triggers: &["মহিলা", "শিশু", "মেয়ে", "women", "child"],
            response: "মহিলা ও শিশুদের জন্য প্রকল্পগুলির মধ্যে রয়েছে বেটি বাঁচাও বেটি পড়াও এবং কন্যা শিশু শিক্ষা ও কল্যাণের জন্য সুকন্যা সমৃদ্ধি যোজনা।",
        },
    ],
    catch_all: "আমি আপনাকে স্বাস্থ্য, শিক্ষা, কৃষি, আবাসন, কর্মসংস্থান এবং মহিলা ও শিশু কল্যাণের মতো বিভাগে সরকারি প্রকল্প খুঁজে পেতে সাহায্য করতে পারি। আপনি কোন ক্ষেত্রে আগ্রহী তা জানাতে পারেন?",
    fallback_response: "দুঃখিত, আমি আপনার প্রশ্ন বুঝতে পারিনি। অনুগ্রহ করে স্বাস্থ্য, শিক্ষা, কৃষি, আবাসন, কর্মসংস্থান বা মহিলা ও শিশু কল্যাণ সম্পর্কে প্রশ্ন করুন।",
    limited_platform_support: false,
    voice_fallback: NO_VOICE_HINTS,
};

const TAMIL: LanguageProfile = LanguageProfile {
    locale_id: "ta",
    english_name: "Tamil",
    recognition_locales: &["ta-IN"],
    synthesis_locales: &["ta-IN"],
    rules: &[
        KeywordRule {
            triggers: &["வணக்கம்", "ஹலோ"],
            response: "வணக்கம்! அரசு திட்டங்களைப் பற்றி அறிய நான் உதவ முடியும். எந்த வகையான திட்டங்களைப் பற்றி தெரிந்துகொள்ள விரும்புகிறீர்கள்?",
        },
        KeywordRule {
            triggers: &["சுகாதாரம்", "மருத்துவம்"],
            response: "நீங்கள் ஆயுஷ்மான் பாரத் திட்டத்திற்கு தகுதி பெறலாம். இது குடும்பத்திற்கு ஆண்டுக்கு ரூ.5 லட்சம் வரை சுகாதார காப்பீட்டு பாதுகாப்பை வழங்குகிறது.",
        },
        KeywordRule {
            triggers: &["கல்வி", "பள்ளி"],
            response: "மாணவர்களுக்கான உதவித்தொகை போன்ற பல கல்வித் திட்டங்கள் உள்ளன. உயர்கல்விக்கு பிஎம் வித்யா திட்டம் நிதி உதவி வழங்குகிறது.",
        },
    ],
    catch_all: "சுகாதாரம், கல்வி, வேளாண்மை, வீட்டுவசதி, வேலைவாய்ப்பு மற்றும் பெண்கள் & குழந்தைகள் நலன் போன்ற துறைகளில் அரசு திட்டங்களைக் கண்டறிய நான் உதவ முடியும். எந்தத் துறையில் உங்களுக்கு ஆர்வம் உள்ளது?",
    fallback_response: "மன்னிக்கவும், உங்கள் கேள்வியை புரிந்துகொள்ள முடியவில்லை. சுகாதாரம், கல்வி, வேளாண்மை, வீட்டுவசதி, வேலைவாய்ப்பு அல்லது பெண்கள் & குழந்தைகள் நலன் போன்ற தலைப்புகளைப் பற்றி கேட்கவும்.",
    limited_platform_support: false,
    voice_fallback: NO_VOICE_HINTS,
};

const PUNJABI: LanguageProfile = LanguageProfile {
    locale_id: "pa",
    english_name: "Punjabi",
    recognition_locales: &["pa-IN", "pa", "pa-Guru-IN", "pa-Guru", "hi-IN"],
    synthesis_locales: &["pa-IN", "pa", "hi-IN"],
    rules: &[
        KeywordRule {
            triggers: &["ਸਤ ਸ੍ਰੀ ਅਕਾਲ", "ਹੈਲੋ", "hello", "hi ", "sat sri akal", "namaste", "ਨਮਸਤੇ"],
            response: "ਸਤ ਸ੍ਰੀ ਅਕਾਲ! ਮੈਂ ਤੁਹਾਨੂੰ ਸਰਕਾਰੀ ਯੋਜਨਾਵਾਂ ਬਾਰੇ ਜਾਣਨ ਵਿੱਚ ਮਦਦ ਕਰ ਸਕਦਾ/ਸਕਦੀ ਹਾਂ। ਤੁਸੀਂ ਕਿਸ ਤਰ੍ਹਾਂ ਦੀਆਂ ਯੋਜਨਾਵਾਂ ਬਾਰੇ ਜਾਣਨਾ ਚਾਹੁੰਦੇ ਹੋ?",
        },
        KeywordRule {
            triggers: &["ਸਿਹਤ", "ਮੈਡੀਕਲ", "ਹਸਪਤਾਲ", "ਡਾਕਟਰ", "health", "medical", "hospital", "doctor", "sehat", "dawai", "ਦਵਾਈ"],
            response: "ਇੱਕ ਸਿਹਤ ਯੋਜਨਾ ਵਜੋਂ, ਤੁਸੀਂ ਆਯੂਸ਼ਮਾਨ ਭਾਰਤ ਲਈ ਯੋਗ ਹੋ ਸਕਦੇ ਹੋ ਜੋ ਪ੍ਰਤੀ ਪਰਿਵਾਰ ਪ੍ਰਤੀ ਸਾਲ 5 ਲੱਖ ਰੁਪਏ ਤੱਕ ਦਾ ਸਿਹਤ ਬੀਮਾ ਕਵਰੇਜ ਪ੍ਰਦਾਨ ਕਰਦਾ ਹੈ। ਕੀ ਤੁਸੀਂ ਹੋਰ ਸਿਹਤ ਯੋਜਨਾਵਾਂ ਬਾਰੇ ਜਾਣਨਾ ਚਾਹੋਗੇ?",
        },
        KeywordRule {
            triggers: &["ਸਿੱਖਿਆ", "ਸਕੂਲ", "ਕਾਲਜ", "ਪੜ੍ਹਾਈ", "education", "school", "college", "padhai", "vidya", "ਵਿਦਿਆ"],
            response: "ਵਿਦਿਆਰਥੀਆਂ ਲਈ ਵਜ਼ੀਫ਼ੇ ਵਰਗੀਆਂ ਕਈ ਸਿੱਖਿਆ ਯੋਜਨਾਵਾਂ ਹਨ। ਪੀਐਮ ਵਿਦਿਆ ਯੋਜਨਾ ਉੱਚ ਸਿੱਖਿਆ ਲਈ ਵਿੱਤੀ ਸਹਾਇਤਾ ਪ੍ਰਦਾਨ ਕਰਦੀ ਹੈ। ਕੀ ਤੁਸੀਂ ਹੋਰ ਜਾਣਨਾ ਚਾਹੋਗੇ?",
        },
        KeywordRule {
            triggers: &["ਕਿਸਾਨ", "ਖੇਤੀ", "ਫਸਲ", "farmer", "agriculture", "farming", "kheti", "fasal", "zameen", "ਜ਼ਮੀਨ"],
            response: "ਇੱਕ ਕਿਸਾਨ ਵਜੋਂ, ਤੁਸੀਂ ਪੀਐਮ-ਕਿਸਾਨ ਲਈ ਯੋਗ ਹੋ ਸਕਦੇ ਹੋ ਜੋ ਸਾਲਾਨਾ 6,000 ਰੁਪਏ ਦੀ ਆਮਦਨੀ ਸਹਾਇਤਾ ਪ੍ਰਦਾਨ ਕਰਦਾ ਹੈ। ਫਸਲ ਬੀਮਾ ਅਤੇ ਸਬਸਿਡੀ ਵਾਲੇ ਉਪਕਰਣਾਂ ਲਈ ਵੀ ਯੋਜਨਾਵਾਂ ਹਨ।",
        },
        KeywordRule {
            triggers: &["ਘਰ", "ਰਿਹਾਇਸ਼", "ਮਕਾਨ", "house", "housing", "home", "ghar", "makaan", "rehaish"],
            response: "ਪੀਐਮ ਆਵਾਸ ਯੋਜਨਾ ਘੱਟ ਆਮਦਨੀ ਵਾਲੇ ਪਰਿਵਾਰਾਂ ਲਈ ਰਿਹਾਇਸ਼ੀ ਸਹਾਇਤਾ ਪ੍ਰਦਾਨ ਕਰਦੀ ਹੈ। ਤੁਸੀਂ ਘਰ ਦੇ ਕਰਜ਼ੇ 'ਤੇ ਸਬਸਿਡੀ ਜਾਂ ਸਿੱਧੀ ਵਿੱਤੀ ਸਹਾਇਤਾ ਲਈ ਯੋਗ ਹੋ ਸਕਦੇ ਹੋ।",
        },
        KeywordRule {
            triggers: &["ਨੌਕਰੀ", "ਰੁਜ਼ਗਾਰ", "ਕੰਮ", "job", "employment", "work", "naukri", "rozgaar", "kaam"],
            response: "ਹੁਨਰ ਵਿਕਾਸ ਅਤੇ ਨੌਕਰੀ ਦੀ ਸਿਖਲਾਈ ਲਈ ਪੀਐਮਕੇਵੀਵਾਈ ਵਰਗੀਆਂ ਰੁਜ਼ਗਾਰ ਯੋਜਨਾਵਾਂ ਹਨ। ਮੁਦਰਾ ਯੋਜਨਾ ਛੋਟੇ ਕਾਰੋਬਾਰਾਂ ਅਤੇ ਉੱਦਮੀਆਂ ਲਈ ਕਰਜ਼ੇ ਪ੍ਰਦਾਨ ਕਰਦੀ ਹੈ।",
        },
        KeywordRule {
            triggers: &["ਔਰਤ", "ਬੱਚਾ", "ਕੁੜੀ", "women", "child", "girl", "aurat", "baccha", "kudi", "ladki", "mahila", "ਮਹਿਲਾ"],
            response: "ਔਰਤਾਂ ਅਤੇ ਬੱਚਿਆਂ ਲਈ ਯੋਜਨਾਵਾਂ ਵਿੱਚ ਬੇਟੀ ਬਚਾਓ ਬੇਟੀ ਪੜ੍ਹਾਓ ਅਤੇ ਲੜਕੀਆਂ ਦੀ ਸਿੱਖਿਆ ਅਤੇ ਭਲਾਈ ਲਈ ਸੁਕੰਨਿਆ ਸਮ੍ਰਿਧੀ ਯੋਜਨਾ ਸ਼ਾਮਲ ਹਨ। ਜਣੇਪਾ ਛੁੱਟੀ ਅਤੇ ਜਨਨੀ ਸੁਰੱਖਿਆ ਯੋਜਨਾ ਵੀ ਉਪਲਬਧ ਹਨ।",
        },
        KeywordRule {
            triggers: &["ਯੋਜਨਾ", "ਸਕੀਮ", "ਸਰਕਾਰ", "scheme", "government", "yojana", "sarkar"],
            response: "ਭਾਰਤ ਸਰਕਾਰ ਵੱਖ-ਵੱਖ ਸ਼੍ਰੇਣੀਆਂ ਵਿੱਚ ਕਈ ਯੋਜਨਾਵਾਂ ਪੇਸ਼ ਕਰਦੀ ਹੈ। ਤੁਸੀਂ ਕਿਸ ਖਾਸ ਖੇਤਰ ਵਿੱਚ ਸਹਾਇਤਾ ਚਾਹੁੰਦੇ ਹੋ? ਤੁਸੀਂ ਸਿਹਤ, ਸਿੱਖਿਆ, ਖੇਤੀਬਾੜੀ, ਰਿਹਾਇਸ਼, ਰੁਜ਼ਗਾਰ ਜਾਂ ਔਰਤਾਂ ਅਤੇ ਬੱਚਿਆਂ ਦੀ ਭਲਾਈ ਬਾਰੇ ਪੁੱਛ ਸਕਦੇ ਹੋ।",
        },
        KeywordRule {
            triggers: &["ਬੁਢਾਪਾ", "ਪੇਂਸ਼ਨ", "old age", "pension", "senior", "budhapa", "budhe", "ਬੁੱਢੇ"],
            response: "ਬਜ਼ੁਰਗਾਂ ਲਈ, ਪ੍ਰਧਾਨ ਮੰਤਰੀ ਵਯ ਵੰਦਨਾ ਯੋਜਨਾ ਅਤੇ ਨੈਸ਼ਨਲ ਪੇਂਸ਼ਨ ਸਿਸਟਮ ਵਰਗੀਆਂ ਯੋਜਨਾਵਾਂ ਹਨ ਜੋ ਪੇਂਸ਼ਨ ਅਤੇ ਵਿੱਤੀ ਸੁਰੱਖਿਆ ਪ੍ਰਦਾਨ ਕਰਦੀਆਂ ਹਨ। ਬਜ਼ੁਰਗਾਂ ਲਈ ਸਿਹਤ ਸਹਾਇਤਾ ਵੀ ਉਪਲਬਧ ਹੈ।",
        },
    ],
    catch_all: "ਮੈਂ ਤੁਹਾਨੂੰ ਸਿਹਤ, ਸਿੱਖਿਆ, ਖੇਤੀਬਾੜੀ, ਰਿਹਾਇਸ਼, ਰੁਜ਼ਗਾਰ ਅਤੇ ਔਰਤਾਂ ਅਤੇ ਬੱਚਿਆਂ ਦੀ ਭਲਾਈ ਵਰਗੇ ਖੇਤਰਾਂ ਵਿੱਚ ਸਰਕਾਰੀ ਯੋਜਨਾਵਾਂ ਲੱਭਣ ਵਿੱਚ ਮਦਦ ਕਰ ਸਕਦਾ/ਸਕਦੀ ਹਾਂ। ਤੁਸੀਂ ਕਿਸ ਖੇਤਰ ਵਿੱਚ ਦਿਲਚਸਪੀ ਰੱਖਦੇ ਹੋ?",
    fallback_response: "ਮੈਨੂੰ ਮਾਫ ਕਰਨਾ, ਮੈਂ ਤੁਹਾਡੇ ਸਵਾਲ ਨੂੰ ਸਮਝ ਨਹੀਂ ਸਕਿਆ। ਕਿਰਪਾ ਕਰਕੇ ਸਿਹਤ, ਸਿੱਖਿਆ, ਖੇਤੀਬਾੜੀ, ਰਿਹਾਇਸ਼, ਰੁਜ਼ਗਾਰ, ਬੁਢਾਪਾ ਪੇਂਸ਼ਨ ਜਾਂ ਔਰਤਾਂ ਅਤੇ ਬੱਚਿਆਂ ਦੀ ਭਲਾਈ ਵਰਗੇ ਵਿਸ਼ਿਆਂ ਬਾਰੇ ਪੁੱਛੋ।",
    limited_platform_support: true,
    voice_fallback: VoiceFallback {
        name_hints: &["punjabi", "panjabi"],
        alternate_prefixes: &["hi"],
        region_suffix: Some("-in"),
        vendor_hints: &["google"],
    },
};

const MALAYALAM: LanguageProfile = LanguageProfile {
    locale_id: "ml",
    english_name: "Malayalam",
    recognition_locales: &["ml-IN"],
    synthesis_locales: &["ml-IN"],
    rules: &[
        KeywordRule {
            triggers: &["നമസ്കാരം", "ഹലോ"],
            response: "നമസ്കാരം! സർക്കാർ പദ്ധതികളെക്കുറിച്ച് അറിയാൻ ഞാൻ സഹായിക്കാം. ഏത് തരം പദ്ധതികളെക്കുറിച്ചാണ് അറിയാൻ ആഗ്രഹിക്കുന്നത്?",
        },
        KeywordRule {
            triggers: &["ആരോഗ്യം", "വൈദ്യം"],
            response: "ആയുഷ്മാൻ ഭാരത് പദ്ധതിക്ക് നിങ്ങൾക്ക് അർഹതയുണ്ടാകാം. ഇത് കുടുംബത്തിന് പ്രതിവർഷം 5 ലക്ഷം രൂപയുടെ ആരോഗ്യ ഇൻഷുറൻസ് പരിരക്ഷ നൽകുന്നു.",
        },
        KeywordRule {
            triggers: &["വിദ്യാഭ്യാസം", "സ്കൂൾ"],
            response: "വിദ്യാർത്ഥികൾക്കായി സ്കോളർഷിപ്പുകൾ ഉൾപ്പെടെയുള്ള നിരവധി വിദ്യാഭ്യാസ പദ്ധതികൾ ലഭ്യമാണ്. ഉന്നത വിദ്യാഭ്യാസത്തിന് പിഎം വിദ്യ പദ്ധതി സാമ്പത്തിക സഹായം നൽകുന്നു.",
        },
    ],
    catch_all: "എനിക്ക് ആരോഗ്യം, വിദ്യാഭ്യാസം, കൃഷി, വീട്, തൊഴിൽ, സ്ത്രീകളുടെയും കുട്ടികളുടെയും ക്ഷേമം തുടങ്ങിയ മേഖലകളിലെ സർക്കാർ പദ്ധതികൾ കണ്ടെത്താൻ സഹായിക്കാം. ഏത് മേഖലയിലാണ് താൽപ്പര്യമുള്ളത്?",
    // No localized misunderstanding string exists for Malayalam yet; the
    // English fallback is used until one is sourced.
    fallback_response: "I'm sorry, I didn't understand your question. Please ask about topics like health, education, agriculture, housing, employment, or women & child welfare.",
    limited_platform_support: false,
    voice_fallback: NO_VOICE_HINTS,
};
