use crate::i18n::TranslationKey::{self, *};

/// Arabic strings.
pub const ARABIC: &[(TranslationKey, &str)] = &[
    // Site
    (SiteName, "جسر الأمل"),
    (SiteTagline, "معًا من أجل الكرامة والتعليم والصحة"),

    // Navigation
    (NavHome, "الرئيسية"),
    (NavAbout, "من نحن"),
    (NavOurWork, "أعمالنا"),
    (NavImpact, "أثرنا"),
    (NavFaq, "الأسئلة الشائعة"),
    (NavGetInvolved, "شارك معنا"),
    (NavDonate, "تبرّع"),
    (NavContact, "اتصل بنا"),
    (NavPolicies, "السياسات"),
    (LanguageLabel, "اللغة"),

    // Footer
    (FooterMission, "تعمل جسر الأمل على تمكين المجتمعات الهشة من خلال التعليم والرعاية الصحية وسبل العيش المستدامة."),
    (FooterQuickLinks, "روابط سريعة"),
    (FooterContact, "تواصل معنا"),
    (FooterAddress, "تفرغ زينة، نواكشوط، موريتانيا"),
    (FooterEmail, "contact@hopebridge.org"),
    (FooterPhone, "+222 45 25 00 00"),
    (FooterRights, "جميع الحقوق محفوظة."),

    // Home
    (HomeTitle, "نبني الأمل، مجتمعًا تلو الآخر"),
    (HomeSubtitle, "نعمل جنبًا إلى جنب مع الأسر لفتح الفصول الدراسية وتجهيز المراكز الصحية وإيصال المياه النظيفة إلى حيث تشتد الحاجة إليها."),
    (HomeCtaDonate, "تبرّع الآن"),
    (HomeCtaVolunteer, "كن متطوعًا"),
    (HomeMissionTitle, "مهمتنا"),
    (HomeMissionText, "أن نمنح كل طفل فرصة للتعلم، وكل أسرة إمكانية الحصول على الرعاية، وكل قرية مصدرًا موثوقًا للمياه النظيفة."),
    (HomeProgramsTitle, "ماذا نفعل"),
    (HomeProgramsText, "تجمع برامجنا بين التعليم والصحة والمياه والمشاريع المدرّة للدخل، وقد صُمّمت بالشراكة مع المجتمعات التي نخدمها."),

    // About
    (AboutTitle, "من نحن"),
    (AboutIntro, "جسر الأمل منظمة غير ربحية مستقلة وغير سياسية، أسسها متطوعون عام 2012."),
    (AboutStoryTitle, "قصتنا"),
    (AboutStoryText, "ما بدأ كحملة لجمع اللوازم المدرسية في حيّ واحد أصبح شبكة من البرامج تصل إلى آلاف الأسر كل عام."),
    (AboutVisionTitle, "رؤيتنا"),
    (AboutVisionText, "مجتمع يستطيع فيه كل إنسان أن يعيش بكرامة وأن يبني مستقبله بنفسه."),
    (AboutValuesTitle, "قيمنا"),
    (AboutValuesText, "الشفافية والاحترام والتضامن والمساءلة توجّه كل قرار نتخذه."),

    // Our work
    (WorkTitle, "أعمالنا"),
    (WorkIntro, "أربعة مجالات عمل وهدف واحد: تغيير دائم يقوده المجتمع."),
    (WorkEducationTitle, "التعليم"),
    (WorkEducationText, "منح دراسية وحقائب مدرسية ودروس محو الأمية ودعم للمعلمين في المدارس الريفية."),
    (WorkHealthTitle, "الصحة"),
    (WorkHealthText, "عيادات متنقلة ومتابعة لصحة الأمهات وحملات توعية حول التغذية والنظافة."),
    (WorkWaterTitle, "المياه والصرف الصحي"),
    (WorkWaterText, "حفر الآبار وصيانتها وتدريب لجان محلية على إدارتها."),
    (WorkLivelihoodsTitle, "سبل العيش"),
    (WorkLivelihoodsText, "تدريب مهني ومنح صغيرة تساعد النساء والشباب على إطلاق أنشطة مدرّة للدخل."),

    // Impact
    (ImpactTitle, "أثرنا"),
    (ImpactIntro, "كل تبرع يتحول إلى نتيجة ملموسة. هذا ما حققناه معًا في العام الماضي."),
    (ImpactStudentsTitle, "دعم 12000 تلميذ"),
    (ImpactStudentsText, "حصل الأطفال على حقائب مدرسية أو دروس دعم أو منح دراسية للبقاء في المدرسة."),
    (ImpactClinicsTitle, "85 يومًا من العيادات المتنقلة"),
    (ImpactClinicsText, "قُدّمت استشارات مجانية في قرى بعيدة عن أي مركز صحي."),
    (ImpactWellsTitle, "40 بئرًا"),
    (ImpactWellsText, "توفر الآبار الجديدة أو المرمّمة اليوم مياه شرب آمنة لأكثر من 20000 شخص."),
    (ImpactStoriesTitle, "قصص من الميدان"),
    (ImpactStoriesText, "وراء كل رقم أسرة أو معلم أو متطوع. قصصهم هي قلب تقريرنا السنوي."),

    // FAQ
    (FaqTitle, "الأسئلة الشائعة"),
    (FaqIntro, "لم تجد إجابتك؟ راسلنا وسنرد عليك خلال يومي عمل."),
    (FaqWhoQuestion, "من يدير جسر الأمل؟"),
    (FaqWhoAnswer, "يشرف مجلس إدارة من المتطوعين على فريق مهني صغير مقره نواكشوط."),
    (FaqBankilyQuestion, "هل يمكنني التبرع عبر بنكيلي؟"),
    (FaqBankilyAnswer, "نعم. اختر بنكيلي في صفحة التبرع، أو حوّل مباشرة إلى رقم التاجر الخاص بنا +222 45 25 00 00 مع المرجع DON."),
    (FaqReceiptQuestion, "هل سأحصل على إيصال؟"),
    (FaqReceiptAnswer, "نعم. يُرسل إيصال عبر البريد الإلكتروني عن كل تبرع فور استلامه."),
    (FaqAllocationQuestion, "كيف تُستخدم التبرعات؟"),
    (FaqAllocationAnswer, "يذهب 85% على الأقل من كل تبرع مباشرة إلى البرامج، ويغطي الباقي تكاليف الإدارة وجمع التبرعات."),
    (FaqVolunteerQuestion, "هل يمكنني التطوع من الخارج؟"),
    (FaqVolunteerAnswer, "نعم. يمكن إنجاز مهام الترجمة والتصميم وجمع التبرعات عن بُعد. أخبرنا بمهاراتك عبر استمارة التطوع."),

    // Get involved
    (InvolvedTitle, "شارك معنا"),
    (InvolvedIntro, "هناك طرق عديدة للوقوف معنا، مهما كان وقتك أو ميزانيتك."),
    (InvolvedVolunteerTitle, "التطوع"),
    (InvolvedVolunteerText, "انضم إلى فرقنا الميدانية، أو ساعد عن بُعد بمهاراتك المهنية."),
    (InvolvedPartnerTitle, "كن شريكًا"),
    (InvolvedPartnerText, "يمكن للشركات والمؤسسات رعاية برنامج أو مضاعفة تبرعات موظفيها."),
    (InvolvedFundraiseTitle, "اجمع التبرعات"),
    (InvolvedFundraiseText, "نظّم سباقًا أو عشاءً أو حملة عبر الإنترنت وادعُ أصدقاءك إلى التبرع."),
    (InvolvedNewsletterTitle, "ابقَ على اطلاع"),
    (InvolvedNewsletterText, "استلم أخبارنا ومستجدات الميدان مرة كل شهر."),
    (InvolvedSuccess, "شكرًا لتطوعك! سيتواصل معك فريقنا قريبًا."),
    (NewsletterSuccess, "تم اشتراكك في نشرتنا الإخبارية."),

    // Donate
    (DonateTitle, "تبرّع الآن"),
    (DonateIntro, "اختر المبلغ وطريقة الدفع. سيتواصل معك فريقنا لإتمام تبرعك."),
    (DonateFrequencyOneTime, "مرة واحدة"),
    (DonateFrequencyMonthly, "شهريًا"),
    (DonateAmountCustom, "مبلغ آخر"),
    (DonateMethodTitle, "طريقة الدفع"),
    (DonateMethodCard, "بطاقة بنكية"),
    (DonateMethodBankily, "بنكيلي"),
    (DonateMethodBankTransfer, "تحويل بنكي"),
    (DonateBankDetails, "للتحويل البنكي، يرجى استخدام المرجع DON ومراسلتنا على contact@hopebridge.org للحصول على بيانات حسابنا."),
    (DonateSecureNote, "لا تتم أي عملية دفع على هذا الموقع."),
    (DonateSubmit, "تأكيد تبرعي"),
    (DonateSuccess, "شكرًا على كرمك! تم تسجيل تعهدك بالتبرع."),

    // Contact
    (ContactTitle, "اتصل بنا"),
    (ContactIntro, "سؤال، أو فكرة شراكة، أو طلب صحفي؟ يسعدنا أن نسمع منك."),
    (ContactHoursTitle, "ساعات العمل"),
    (ContactHoursText, "من الاثنين إلى الجمعة، من 9:00 إلى 17:00."),
    (ContactSuccess, "شكرًا على رسالتك. سنعود إليك قريبًا."),

    // Form fields
    (FormName, "الاسم الكامل"),
    (FormEmail, "البريد الإلكتروني"),
    (FormPhone, "رقم الهاتف"),
    (FormSubject, "الموضوع"),
    (FormMessage, "الرسالة"),
    (FormInterest, "مجال الاهتمام"),
    (FormAvailability, "أوقات التفرغ"),
    (FormSubmit, "إرسال"),
    (FormError, "يرجى التحقق من الاستمارة والمحاولة مرة أخرى."),

    // Policies
    (PoliciesTitle, "السياسات"),
    (PoliciesIntro, "كيف نتعامل مع معلوماتك وتبرعاتك."),
    (PoliciesPrivacyTitle, "الخصوصية"),
    (PoliciesPrivacyText, "لا نجمع إلا المعلومات التي تختار إرسالها إلينا، ولا نبيعها ولا نشاركها أبدًا مع أطراف ثالثة."),
    (PoliciesDonationsTitle, "التبرعات والاسترداد"),
    (PoliciesDonationsText, "إذا أخطأت في تبرعك، تواصل معنا خلال 30 يومًا وسنعيد لك المبلغ."),
    (PoliciesCookiesTitle, "ملفات تعريف الارتباط"),
    (PoliciesCookiesText, "يحفظ هذا الموقع ملف تعريف ارتباط واحدًا فقط يتذكر لغتك المفضلة."),

    // Not found
    (NotFoundTitle, "الصفحة غير موجودة"),
    (NotFoundText, "الصفحة التي تبحث عنها غير موجودة أو تم نقلها."),
    (NotFoundBack, "العودة إلى الرئيسية"),
];
