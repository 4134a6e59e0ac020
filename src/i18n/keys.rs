//! Translation keys: the stable contract between page content and strings.
//!
//! Every string the site renders is named by a [`TranslationKey`]. The dotted
//! form (`nav.about`, `faq.donations.bankily.question`) is what appears in
//! translation tables and override files.

macro_rules! translation_keys {
    ($($variant:ident => $key:literal,)*) => {
        /// Closed set of translation keys used across the site.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TranslationKey {
            $($variant,)*
        }

        impl TranslationKey {
            /// Every key, in declaration order.
            pub const ALL: &'static [TranslationKey] = &[$(TranslationKey::$variant,)*];

            /// Dotted key string.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(TranslationKey::$variant => $key,)*
                }
            }
        }
    };
}

translation_keys! {
    // Site
    SiteName => "site.name",
    SiteTagline => "site.tagline",

    // Navigation
    NavHome => "nav.home",
    NavAbout => "nav.about",
    NavOurWork => "nav.ourWork",
    NavImpact => "nav.impact",
    NavFaq => "nav.faq",
    NavGetInvolved => "nav.getInvolved",
    NavDonate => "nav.donate",
    NavContact => "nav.contact",
    NavPolicies => "nav.policies",
    LanguageLabel => "language.label",

    // Footer
    FooterMission => "footer.mission",
    FooterQuickLinks => "footer.quickLinks",
    FooterContact => "footer.contact",
    FooterAddress => "footer.address",
    FooterEmail => "footer.email",
    FooterPhone => "footer.phone",
    FooterRights => "footer.rights",

    // Home
    HomeTitle => "home.title",
    HomeSubtitle => "home.subtitle",
    HomeCtaDonate => "home.cta.donate",
    HomeCtaVolunteer => "home.cta.volunteer",
    HomeMissionTitle => "home.mission.title",
    HomeMissionText => "home.mission.text",
    HomeProgramsTitle => "home.programs.title",
    HomeProgramsText => "home.programs.text",

    // About
    AboutTitle => "about.title",
    AboutIntro => "about.intro",
    AboutStoryTitle => "about.story.title",
    AboutStoryText => "about.story.text",
    AboutVisionTitle => "about.vision.title",
    AboutVisionText => "about.vision.text",
    AboutValuesTitle => "about.values.title",
    AboutValuesText => "about.values.text",

    // Our work
    WorkTitle => "work.title",
    WorkIntro => "work.intro",
    WorkEducationTitle => "work.education.title",
    WorkEducationText => "work.education.text",
    WorkHealthTitle => "work.health.title",
    WorkHealthText => "work.health.text",
    WorkWaterTitle => "work.water.title",
    WorkWaterText => "work.water.text",
    WorkLivelihoodsTitle => "work.livelihoods.title",
    WorkLivelihoodsText => "work.livelihoods.text",

    // Impact
    ImpactTitle => "impact.title",
    ImpactIntro => "impact.intro",
    ImpactStudentsTitle => "impact.students.title",
    ImpactStudentsText => "impact.students.text",
    ImpactClinicsTitle => "impact.clinics.title",
    ImpactClinicsText => "impact.clinics.text",
    ImpactWellsTitle => "impact.wells.title",
    ImpactWellsText => "impact.wells.text",
    ImpactStoriesTitle => "impact.stories.title",
    ImpactStoriesText => "impact.stories.text",

    // FAQ
    FaqTitle => "faq.title",
    FaqIntro => "faq.intro",
    FaqWhoQuestion => "faq.general.who.question",
    FaqWhoAnswer => "faq.general.who.answer",
    FaqBankilyQuestion => "faq.donations.bankily.question",
    FaqBankilyAnswer => "faq.donations.bankily.answer",
    FaqReceiptQuestion => "faq.donations.receipt.question",
    FaqReceiptAnswer => "faq.donations.receipt.answer",
    FaqAllocationQuestion => "faq.donations.allocation.question",
    FaqAllocationAnswer => "faq.donations.allocation.answer",
    FaqVolunteerQuestion => "faq.volunteer.abroad.question",
    FaqVolunteerAnswer => "faq.volunteer.abroad.answer",

    // Get involved
    InvolvedTitle => "involved.title",
    InvolvedIntro => "involved.intro",
    InvolvedVolunteerTitle => "involved.volunteer.title",
    InvolvedVolunteerText => "involved.volunteer.text",
    InvolvedPartnerTitle => "involved.partner.title",
    InvolvedPartnerText => "involved.partner.text",
    InvolvedFundraiseTitle => "involved.fundraise.title",
    InvolvedFundraiseText => "involved.fundraise.text",
    InvolvedNewsletterTitle => "involved.newsletter.title",
    InvolvedNewsletterText => "involved.newsletter.text",
    InvolvedSuccess => "involved.success",
    NewsletterSuccess => "newsletter.success",

    // Donate
    DonateTitle => "donate.title",
    DonateIntro => "donate.intro",
    DonateFrequencyOneTime => "donate.frequency.oneTime",
    DonateFrequencyMonthly => "donate.frequency.monthly",
    DonateAmountCustom => "donate.amount.custom",
    DonateMethodTitle => "donate.method.title",
    DonateMethodCard => "donate.method.card",
    DonateMethodBankily => "donate.method.bankily",
    DonateMethodBankTransfer => "donate.method.bankTransfer",
    DonateBankDetails => "donate.bank.details",
    DonateSecureNote => "donate.secure.note",
    DonateSubmit => "donate.submit",
    DonateSuccess => "donate.success",

    // Contact
    ContactTitle => "contact.title",
    ContactIntro => "contact.intro",
    ContactHoursTitle => "contact.hours.title",
    ContactHoursText => "contact.hours.text",
    ContactSuccess => "contact.success",

    // Form fields
    FormName => "form.name",
    FormEmail => "form.email",
    FormPhone => "form.phone",
    FormSubject => "form.subject",
    FormMessage => "form.message",
    FormInterest => "form.interest",
    FormAvailability => "form.availability",
    FormSubmit => "form.submit",
    FormError => "form.error",

    // Policies
    PoliciesTitle => "policies.title",
    PoliciesIntro => "policies.intro",
    PoliciesPrivacyTitle => "policies.privacy.title",
    PoliciesPrivacyText => "policies.privacy.text",
    PoliciesDonationsTitle => "policies.donations.title",
    PoliciesDonationsText => "policies.donations.text",
    PoliciesCookiesTitle => "policies.cookies.title",
    PoliciesCookiesText => "policies.cookies.text",

    // Not found
    NotFoundTitle => "notFound.title",
    NotFoundText => "notFound.text",
    NotFoundBack => "notFound.back",
}

impl TranslationKey {
    /// Map a dotted key back to its variant.
    pub fn parse(key: &str) -> Option<TranslationKey> {
        Self::ALL.iter().copied().find(|k| k.as_str() == key)
    }
}

impl AsRef<str> for TranslationKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
