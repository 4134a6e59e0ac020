use crate::i18n::TranslationKey;

/// English strings (default language).
///
/// This is an exhaustive match: adding a key without an English string does
/// not compile.
pub fn english(key: TranslationKey) -> &'static str {
    use TranslationKey::*;

    match key {
        // Site
        SiteName => "Hope Bridge",
        SiteTagline => "Together for dignity, education and health",

        // Navigation
        NavHome => "Home",
        NavAbout => "About",
        NavOurWork => "Our Work",
        NavImpact => "Impact",
        NavFaq => "FAQ",
        NavGetInvolved => "Get Involved",
        NavDonate => "Donate",
        NavContact => "Contact",
        NavPolicies => "Policies",
        LanguageLabel => "Language",

        // Footer
        FooterMission => "Hope Bridge empowers vulnerable communities through education, healthcare and sustainable livelihoods.",
        FooterQuickLinks => "Quick links",
        FooterContact => "Contact us",
        FooterAddress => "Tevragh Zeina, Nouakchott, Mauritania",
        FooterEmail => "contact@hopebridge.org",
        FooterPhone => "+222 45 25 00 00",
        FooterRights => "All rights reserved.",

        // Home
        HomeTitle => "Building hope, one community at a time",
        HomeSubtitle => "We work alongside families to open classrooms, staff clinics and bring clean water where it is needed most.",
        HomeCtaDonate => "Donate now",
        HomeCtaVolunteer => "Become a volunteer",
        HomeMissionTitle => "Our mission",
        HomeMissionText => "To give every child a chance to learn, every family access to care and every village a reliable source of clean water.",
        HomeProgramsTitle => "What we do",
        HomeProgramsText => "Our programs combine education, health, water and income projects designed together with the communities we serve.",

        // About
        AboutTitle => "About us",
        AboutIntro => "Hope Bridge is an independent, non-political nonprofit organization founded by volunteers in 2012.",
        AboutStoryTitle => "Our story",
        AboutStoryText => "What began as a school supplies drive in a single neighbourhood has grown into a network of programs reaching thousands of families each year.",
        AboutVisionTitle => "Our vision",
        AboutVisionText => "A society where every person can live with dignity and build their own future.",
        AboutValuesTitle => "Our values",
        AboutValuesText => "Transparency, respect, solidarity and accountability guide every decision we make.",

        // Our work
        WorkTitle => "Our work",
        WorkIntro => "Four program areas, one goal: lasting change led by the community.",
        WorkEducationTitle => "Education",
        WorkEducationText => "Scholarships, school kits, literacy classes and support for teachers in rural schools.",
        WorkHealthTitle => "Health",
        WorkHealthText => "Mobile clinics, maternal health follow-up and awareness campaigns on nutrition and hygiene.",
        WorkWaterTitle => "Water and sanitation",
        WorkWaterText => "Drilling and maintaining wells, and training local committees to manage them.",
        WorkLivelihoodsTitle => "Livelihoods",
        WorkLivelihoodsText => "Vocational training and small grants that help women and young people start income-generating activities.",

        // Impact
        ImpactTitle => "Our impact",
        ImpactIntro => "Every gift becomes a concrete result. Here is what we achieved together last year.",
        ImpactStudentsTitle => "12,000 students supported",
        ImpactStudentsText => "Children received school kits, tutoring or scholarships to stay in school.",
        ImpactClinicsTitle => "85 mobile clinic days",
        ImpactClinicsText => "Free consultations were provided in villages far from any health centre.",
        ImpactWellsTitle => "40 wells",
        ImpactWellsText => "New or restored wells now provide safe drinking water to more than 20,000 people.",
        ImpactStoriesTitle => "Stories from the field",
        ImpactStoriesText => "Behind each number is a family, a teacher or a volunteer. Their stories are the heart of our annual report.",

        // FAQ
        FaqTitle => "Frequently asked questions",
        FaqIntro => "Can't find your answer? Write to us and we will reply within two working days.",
        FaqWhoQuestion => "Who runs Hope Bridge?",
        FaqWhoAnswer => "A volunteer board of directors oversees a small professional team based in Nouakchott.",
        FaqBankilyQuestion => "Can I donate with Bankily?",
        FaqBankilyAnswer => "Yes. Choose Bankily on the donation page, or transfer directly to our merchant number +222 45 25 00 00 with the reference DON.",
        FaqReceiptQuestion => "Will I receive a receipt?",
        FaqReceiptAnswer => "Yes. A receipt is sent by email for every gift once it has been received.",
        FaqAllocationQuestion => "How are donations used?",
        FaqAllocationAnswer => "At least 85% of every donation goes directly to programs. The rest covers administration and fundraising.",
        FaqVolunteerQuestion => "Can I volunteer from abroad?",
        FaqVolunteerAnswer => "Yes. Translation, design and fundraising tasks can be done remotely. Tell us about your skills through the volunteer form.",

        // Get involved
        InvolvedTitle => "Get involved",
        InvolvedIntro => "There are many ways to stand with us, whatever your time or budget.",
        InvolvedVolunteerTitle => "Volunteer",
        InvolvedVolunteerText => "Join our field teams, or help remotely with your professional skills.",
        InvolvedPartnerTitle => "Become a partner",
        InvolvedPartnerText => "Companies and foundations can sponsor a program or match employee giving.",
        InvolvedFundraiseTitle => "Fundraise",
        InvolvedFundraiseText => "Organise a run, a dinner or an online campaign and invite your friends to give.",
        InvolvedNewsletterTitle => "Stay informed",
        InvolvedNewsletterText => "Receive our news and field updates once a month.",
        InvolvedSuccess => "Thank you for volunteering! Our team will contact you shortly.",
        NewsletterSuccess => "You are now subscribed to our newsletter.",

        // Donate
        DonateTitle => "Make a donation",
        DonateIntro => "Choose an amount and a payment method. Our team will contact you to complete your gift.",
        DonateFrequencyOneTime => "One-time",
        DonateFrequencyMonthly => "Monthly",
        DonateAmountCustom => "Other amount",
        DonateMethodTitle => "Payment method",
        DonateMethodCard => "Bank card",
        DonateMethodBankily => "Bankily",
        DonateMethodBankTransfer => "Bank transfer",
        DonateBankDetails => "For bank transfers, please use the reference DON and write to contact@hopebridge.org to receive our account details.",
        DonateSecureNote => "No payment is taken on this website.",
        DonateSubmit => "Confirm my gift",
        DonateSuccess => "Thank you for your generosity! Your pledge has been recorded.",

        // Contact
        ContactTitle => "Contact us",
        ContactIntro => "A question, a partnership idea or a press request? We would love to hear from you.",
        ContactHoursTitle => "Office hours",
        ContactHoursText => "Monday to Friday, 9:00 to 17:00.",
        ContactSuccess => "Thank you for your message. We will get back to you soon.",

        // Form fields
        FormName => "Full name",
        FormEmail => "Email address",
        FormPhone => "Phone number",
        FormSubject => "Subject",
        FormMessage => "Message",
        FormInterest => "Area of interest",
        FormAvailability => "Availability",
        FormSubmit => "Send",
        FormError => "Please check the form and try again.",

        // Policies
        PoliciesTitle => "Policies",
        PoliciesIntro => "How we handle your information and your donations.",
        PoliciesPrivacyTitle => "Privacy",
        PoliciesPrivacyText => "We only collect the information you choose to send us and never sell or share it with third parties.",
        PoliciesDonationsTitle => "Donations and refunds",
        PoliciesDonationsText => "If you made a mistake in your donation, contact us within 30 days and we will refund it.",
        PoliciesCookiesTitle => "Cookies",
        PoliciesCookiesText => "This site stores a single cookie that remembers your preferred language.",

        // Not found
        NotFoundTitle => "Page not found",
        NotFoundText => "The page you are looking for does not exist or has moved.",
        NotFoundBack => "Back to home",
    }
}
