//! Page table: paths, navigation labels and content blocks.
//!
//! Content is data only; every block names translation keys and the renderer
//! resolves them for the request's language.

use crate::i18n::TranslationKey::{self, *};

/// A block of page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// Heading plus paragraph
    Section {
        title: TranslationKey,
        body: TranslationKey,
    },
    /// FAQ entry
    Question {
        question: TranslationKey,
        answer: TranslationKey,
    },
    /// Call-to-action link to another page
    Link {
        label: TranslationKey,
        target: Page,
    },
    /// Standalone paragraph
    Note(TranslationKey),
}

/// Which simulated form a page carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Volunteer,
    Newsletter,
    Donation,
}

impl FormKind {
    /// Path the form posts to.
    pub fn action(&self) -> &'static str {
        match self {
            FormKind::Contact => "/contact",
            FormKind::Volunteer => "/get-involved",
            FormKind::Newsletter => "/newsletter",
            FormKind::Donation => "/donate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    OurWork,
    Impact,
    Faq,
    GetInvolved,
    Donate,
    Contact,
    Policies,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 9] = [
        Page::Home,
        Page::About,
        Page::OurWork,
        Page::Impact,
        Page::Faq,
        Page::GetInvolved,
        Page::Donate,
        Page::Contact,
        Page::Policies,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::OurWork => "/our-work",
            Page::Impact => "/impact",
            Page::Faq => "/faq",
            Page::GetInvolved => "/get-involved",
            Page::Donate => "/donate",
            Page::Contact => "/contact",
            Page::Policies => "/policies",
        }
    }

    /// Match a request path. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Page> {
        let normalized = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(trimmed) => trimmed,
        };
        Self::ALL.iter().copied().find(|page| page.path() == normalized)
    }

    pub fn nav_key(&self) -> TranslationKey {
        match self {
            Page::Home => NavHome,
            Page::About => NavAbout,
            Page::OurWork => NavOurWork,
            Page::Impact => NavImpact,
            Page::Faq => NavFaq,
            Page::GetInvolved => NavGetInvolved,
            Page::Donate => NavDonate,
            Page::Contact => NavContact,
            Page::Policies => NavPolicies,
        }
    }

    pub fn title_key(&self) -> TranslationKey {
        match self {
            Page::Home => HomeTitle,
            Page::About => AboutTitle,
            Page::OurWork => WorkTitle,
            Page::Impact => ImpactTitle,
            Page::Faq => FaqTitle,
            Page::GetInvolved => InvolvedTitle,
            Page::Donate => DonateTitle,
            Page::Contact => ContactTitle,
            Page::Policies => PoliciesTitle,
        }
    }

    pub fn intro_key(&self) -> TranslationKey {
        match self {
            Page::Home => HomeSubtitle,
            Page::About => AboutIntro,
            Page::OurWork => WorkIntro,
            Page::Impact => ImpactIntro,
            Page::Faq => FaqIntro,
            Page::GetInvolved => InvolvedIntro,
            Page::Donate => DonateIntro,
            Page::Contact => ContactIntro,
            Page::Policies => PoliciesIntro,
        }
    }

    pub fn blocks(&self) -> &'static [Block] {
        match self {
            Page::Home => &[
                Block::Link {
                    label: HomeCtaDonate,
                    target: Page::Donate,
                },
                Block::Link {
                    label: HomeCtaVolunteer,
                    target: Page::GetInvolved,
                },
                Block::Section {
                    title: HomeMissionTitle,
                    body: HomeMissionText,
                },
                Block::Section {
                    title: HomeProgramsTitle,
                    body: HomeProgramsText,
                },
            ],
            Page::About => &[
                Block::Section {
                    title: AboutStoryTitle,
                    body: AboutStoryText,
                },
                Block::Section {
                    title: AboutVisionTitle,
                    body: AboutVisionText,
                },
                Block::Section {
                    title: AboutValuesTitle,
                    body: AboutValuesText,
                },
            ],
            Page::OurWork => &[
                Block::Section {
                    title: WorkEducationTitle,
                    body: WorkEducationText,
                },
                Block::Section {
                    title: WorkHealthTitle,
                    body: WorkHealthText,
                },
                Block::Section {
                    title: WorkWaterTitle,
                    body: WorkWaterText,
                },
                Block::Section {
                    title: WorkLivelihoodsTitle,
                    body: WorkLivelihoodsText,
                },
            ],
            Page::Impact => &[
                Block::Section {
                    title: ImpactStudentsTitle,
                    body: ImpactStudentsText,
                },
                Block::Section {
                    title: ImpactClinicsTitle,
                    body: ImpactClinicsText,
                },
                Block::Section {
                    title: ImpactWellsTitle,
                    body: ImpactWellsText,
                },
                Block::Section {
                    title: ImpactStoriesTitle,
                    body: ImpactStoriesText,
                },
            ],
            Page::Faq => &[
                Block::Question {
                    question: FaqWhoQuestion,
                    answer: FaqWhoAnswer,
                },
                Block::Question {
                    question: FaqBankilyQuestion,
                    answer: FaqBankilyAnswer,
                },
                Block::Question {
                    question: FaqReceiptQuestion,
                    answer: FaqReceiptAnswer,
                },
                Block::Question {
                    question: FaqAllocationQuestion,
                    answer: FaqAllocationAnswer,
                },
                Block::Question {
                    question: FaqVolunteerQuestion,
                    answer: FaqVolunteerAnswer,
                },
            ],
            Page::GetInvolved => &[
                Block::Section {
                    title: InvolvedVolunteerTitle,
                    body: InvolvedVolunteerText,
                },
                Block::Section {
                    title: InvolvedPartnerTitle,
                    body: InvolvedPartnerText,
                },
                Block::Section {
                    title: InvolvedFundraiseTitle,
                    body: InvolvedFundraiseText,
                },
                Block::Section {
                    title: InvolvedNewsletterTitle,
                    body: InvolvedNewsletterText,
                },
            ],
            Page::Donate => &[Block::Note(DonateSecureNote), Block::Note(DonateBankDetails)],
            Page::Contact => &[Block::Section {
                title: ContactHoursTitle,
                body: ContactHoursText,
            }],
            Page::Policies => &[
                Block::Section {
                    title: PoliciesPrivacyTitle,
                    body: PoliciesPrivacyText,
                },
                Block::Section {
                    title: PoliciesDonationsTitle,
                    body: PoliciesDonationsText,
                },
                Block::Section {
                    title: PoliciesCookiesTitle,
                    body: PoliciesCookiesText,
                },
            ],
        }
    }

    /// Forms shown on the page, in display order.
    pub fn forms(&self) -> &'static [FormKind] {
        match self {
            Page::GetInvolved => &[FormKind::Volunteer, FormKind::Newsletter],
            Page::Donate => &[FormKind::Donation],
            Page::Contact => &[FormKind::Contact],
            _ => &[],
        }
    }
}
