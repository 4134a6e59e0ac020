use crate::i18n::TranslationKey::{self, *};

/// French strings.
pub const FRENCH: &[(TranslationKey, &str)] = &[
    // Site
    (SiteName, "Hope Bridge"),
    (SiteTagline, "Ensemble pour la dignité, l'éducation et la santé"),

    // Navigation
    (NavHome, "Accueil"),
    (NavAbout, "À propos"),
    (NavOurWork, "Nos actions"),
    (NavImpact, "Impact"),
    (NavFaq, "FAQ"),
    (NavGetInvolved, "S'engager"),
    (NavDonate, "Faire un don"),
    (NavContact, "Contact"),
    (NavPolicies, "Politiques"),
    (LanguageLabel, "Langue"),

    // Footer
    (FooterMission, "Hope Bridge accompagne les communautés vulnérables par l'éducation, la santé et des moyens de subsistance durables."),
    (FooterQuickLinks, "Liens rapides"),
    (FooterContact, "Nous contacter"),
    (FooterAddress, "Tevragh Zeina, Nouakchott, Mauritanie"),
    (FooterEmail, "contact@hopebridge.org"),
    (FooterPhone, "+222 45 25 00 00"),
    (FooterRights, "Tous droits réservés."),

    // Home
    (HomeTitle, "Construire l'espoir, une communauté à la fois"),
    (HomeSubtitle, "Nous travaillons aux côtés des familles pour ouvrir des classes, équiper des centres de soins et apporter l'eau potable là où elle manque le plus."),
    (HomeCtaDonate, "Faire un don"),
    (HomeCtaVolunteer, "Devenir bénévole"),
    (HomeMissionTitle, "Notre mission"),
    (HomeMissionText, "Donner à chaque enfant la chance d'apprendre, à chaque famille l'accès aux soins et à chaque village une source d'eau fiable."),
    (HomeProgramsTitle, "Ce que nous faisons"),
    (HomeProgramsText, "Nos programmes associent éducation, santé, eau et activités génératrices de revenus, conçus avec les communautés que nous servons."),

    // About
    (AboutTitle, "À propos de nous"),
    (AboutIntro, "Hope Bridge est une organisation à but non lucratif, indépendante et apolitique, fondée par des bénévoles en 2012."),
    (AboutStoryTitle, "Notre histoire"),
    (AboutStoryText, "Ce qui a commencé par une collecte de fournitures scolaires dans un seul quartier est devenu un réseau de programmes qui touche des milliers de familles chaque année."),
    (AboutVisionTitle, "Notre vision"),
    (AboutVisionText, "Une société où chaque personne peut vivre dans la dignité et construire son propre avenir."),
    (AboutValuesTitle, "Nos valeurs"),
    (AboutValuesText, "Transparence, respect, solidarité et redevabilité guident chacune de nos décisions."),

    // Our work
    (WorkTitle, "Nos actions"),
    (WorkIntro, "Quatre domaines d'action, un seul objectif : un changement durable porté par la communauté."),
    (WorkEducationTitle, "Éducation"),
    (WorkEducationText, "Bourses, kits scolaires, cours d'alphabétisation et soutien aux enseignants des écoles rurales."),
    (WorkHealthTitle, "Santé"),
    (WorkHealthText, "Cliniques mobiles, suivi de la santé maternelle et campagnes de sensibilisation à la nutrition et à l'hygiène."),
    (WorkWaterTitle, "Eau et assainissement"),
    (WorkWaterText, "Forage et entretien de puits, et formation de comités locaux pour les gérer."),
    (WorkLivelihoodsTitle, "Moyens de subsistance"),
    (WorkLivelihoodsText, "Formations professionnelles et petites subventions pour aider les femmes et les jeunes à lancer des activités génératrices de revenus."),

    // Impact
    (ImpactTitle, "Notre impact"),
    (ImpactIntro, "Chaque don devient un résultat concret. Voici ce que nous avons accompli ensemble l'an dernier."),
    (ImpactStudentsTitle, "12 000 élèves soutenus"),
    (ImpactStudentsText, "Des enfants ont reçu des kits scolaires, du soutien scolaire ou des bourses pour rester à l'école."),
    (ImpactClinicsTitle, "85 journées de clinique mobile"),
    (ImpactClinicsText, "Des consultations gratuites ont été assurées dans des villages éloignés de tout centre de santé."),
    (ImpactWellsTitle, "40 puits"),
    (ImpactWellsText, "Des puits neufs ou réhabilités fournissent désormais de l'eau potable à plus de 20 000 personnes."),
    (ImpactStoriesTitle, "Témoignages du terrain"),
    (ImpactStoriesText, "Derrière chaque chiffre, il y a une famille, un enseignant ou un bénévole. Leurs histoires sont au cœur de notre rapport annuel."),

    // FAQ
    (FaqTitle, "Questions fréquentes"),
    (FaqIntro, "Vous ne trouvez pas votre réponse ? Écrivez-nous, nous répondons sous deux jours ouvrés."),
    (FaqWhoQuestion, "Qui dirige Hope Bridge ?"),
    (FaqWhoAnswer, "Un conseil d'administration bénévole supervise une petite équipe professionnelle basée à Nouakchott."),
    (FaqBankilyQuestion, "Puis-je faire un don avec Bankily ?"),
    (FaqBankilyAnswer, "Oui. Choisissez Bankily sur la page de don, ou faites un transfert directement vers notre numéro marchand +222 45 25 00 00 avec la référence DON."),
    (FaqReceiptQuestion, "Vais-je recevoir un reçu ?"),
    (FaqReceiptAnswer, "Oui. Un reçu est envoyé par e-mail pour chaque don dès sa réception."),
    (FaqAllocationQuestion, "Comment les dons sont-ils utilisés ?"),
    (FaqAllocationAnswer, "Au moins 85 % de chaque don va directement aux programmes. Le reste couvre l'administration et la collecte de fonds."),
    (FaqVolunteerQuestion, "Puis-je être bénévole depuis l'étranger ?"),
    (FaqVolunteerAnswer, "Oui. Traduction, graphisme et collecte de fonds peuvent se faire à distance. Présentez vos compétences via le formulaire bénévole."),

    // Get involved
    (InvolvedTitle, "S'engager"),
    (InvolvedIntro, "Il existe de nombreuses façons de nous soutenir, quels que soient votre temps ou votre budget."),
    (InvolvedVolunteerTitle, "Bénévolat"),
    (InvolvedVolunteerText, "Rejoignez nos équipes de terrain, ou aidez à distance grâce à vos compétences professionnelles."),
    (InvolvedPartnerTitle, "Devenir partenaire"),
    (InvolvedPartnerText, "Entreprises et fondations peuvent parrainer un programme ou abonder les dons de leurs salariés."),
    (InvolvedFundraiseTitle, "Collecter des fonds"),
    (InvolvedFundraiseText, "Organisez une course, un dîner ou une campagne en ligne et invitez vos proches à donner."),
    (InvolvedNewsletterTitle, "Restez informé"),
    (InvolvedNewsletterText, "Recevez nos nouvelles et nos actualités du terrain une fois par mois."),
    (InvolvedSuccess, "Merci pour votre engagement ! Notre équipe vous contactera rapidement."),
    (NewsletterSuccess, "Vous êtes maintenant abonné à notre lettre d'information."),

    // Donate
    (DonateTitle, "Faire un don"),
    (DonateIntro, "Choisissez un montant et un moyen de paiement. Notre équipe vous contactera pour finaliser votre don."),
    (DonateFrequencyOneTime, "Ponctuel"),
    (DonateFrequencyMonthly, "Mensuel"),
    (DonateAmountCustom, "Autre montant"),
    (DonateMethodTitle, "Moyen de paiement"),
    (DonateMethodCard, "Carte bancaire"),
    (DonateMethodBankily, "Bankily"),
    (DonateMethodBankTransfer, "Virement bancaire"),
    (DonateBankDetails, "Pour un virement, indiquez la référence DON et écrivez à contact@hopebridge.org pour recevoir nos coordonnées bancaires."),
    (DonateSecureNote, "Aucun paiement n'est effectué sur ce site."),
    (DonateSubmit, "Confirmer mon don"),
    (DonateSuccess, "Merci pour votre générosité ! Votre promesse de don a été enregistrée."),

    // Contact
    (ContactTitle, "Nous contacter"),
    (ContactIntro, "Une question, une idée de partenariat ou une demande de presse ? Nous serons ravis de vous lire."),
    (ContactHoursTitle, "Horaires du bureau"),
    (ContactHoursText, "Du lundi au vendredi, de 9 h à 17 h."),
    (ContactSuccess, "Merci pour votre message. Nous vous répondrons très bientôt."),

    // Form fields
    (FormName, "Nom complet"),
    (FormEmail, "Adresse e-mail"),
    (FormPhone, "Numéro de téléphone"),
    (FormSubject, "Objet"),
    (FormMessage, "Message"),
    (FormInterest, "Domaine d'intérêt"),
    (FormAvailability, "Disponibilités"),
    (FormSubmit, "Envoyer"),
    (FormError, "Veuillez vérifier le formulaire et réessayer."),

    // Policies
    (PoliciesTitle, "Politiques"),
    (PoliciesIntro, "Comment nous traitons vos informations et vos dons."),
    (PoliciesPrivacyTitle, "Confidentialité"),
    (PoliciesPrivacyText, "Nous ne collectons que les informations que vous choisissez de nous transmettre et ne les vendons ni ne les partageons jamais avec des tiers."),
    (PoliciesDonationsTitle, "Dons et remboursements"),
    (PoliciesDonationsText, "En cas d'erreur lors de votre don, contactez-nous sous 30 jours et nous vous rembourserons."),
    (PoliciesCookiesTitle, "Cookies"),
    (PoliciesCookiesText, "Ce site enregistre un seul cookie, qui mémorise votre langue préférée."),

    // Not found
    (NotFoundTitle, "Page introuvable"),
    (NotFoundText, "La page que vous recherchez n'existe pas ou a été déplacée."),
    (NotFoundBack, "Retour à l'accueil"),
];
