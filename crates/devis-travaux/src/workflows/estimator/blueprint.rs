use super::domain::{AnswerOption, Category, Question};

fn question(id: &str, prompt: &str, options: Vec<AnswerOption>) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options,
        allows_custom_value: false,
    }
}

/// Question flagged as accepting a typed quantity.
fn open_question(id: &str, prompt: &str, options: Vec<AnswerOption>) -> Question {
    Question {
        allows_custom_value: true,
        ..question(id, prompt, options)
    }
}

fn category(id: &str, title: &str, questions: Vec<Question>) -> Category {
    Category {
        id: id.to_string(),
        title: title.to_string(),
        questions,
    }
}

fn choice(text: &str, value: i32, next: &str) -> AnswerOption {
    AnswerOption::choice(text, value, next)
}

fn last(text: &str, value: i32) -> AnswerOption {
    AnswerOption::last(text, value)
}

fn custom(text: &str, next: &str) -> AnswerOption {
    AnswerOption::custom(text, Some(next))
}

/// Built-in renovation categories offered on the estimate page.
pub(crate) fn standard_categories() -> Vec<Category> {
    vec![
        walls(),
        floor(),
        energy_renovation(),
        full_renovation(),
        electricity(),
        plumbing(),
        heating(),
        joinery(),
        security(),
    ]
}

fn walls() -> Category {
    category(
        "walls",
        "Peinture & Revêtements muraux",
        vec![
            open_question(
                "surface",
                "Surface totale à traiter (m²) ?",
                vec![
                    choice("< 20m²", 250, "height"),
                    choice("20-40m²", 450, "height"),
                    choice("40-60m²", 650, "height"),
                    choice("60-80m²", 850, "height"),
                    choice("80-100m²", 1100, "height"),
                    choice("> 100m²", 1500, "height"),
                    custom("Autre valeur", "height"),
                ],
            ),
            open_question(
                "height",
                "Hauteur sous plafond ?",
                vec![
                    choice("Standard (< 2.4m)", 0, "angles"),
                    choice("Intermédiaire (2.4m-2.7m)", 120, "angles"),
                    choice("Haute (2.7m-3.0m)", 240, "angles"),
                    choice("Très haute (> 3.0m)", 360, "angles"),
                    custom("Autre valeur", "angles"),
                ],
            ),
            open_question(
                "angles",
                "Nombre d'angles/complexité ?",
                vec![
                    choice("Simple (4 angles)", 0, "condition"),
                    choice("Moyen (5-6 angles)", 100, "condition"),
                    choice("Complexe (7-8 angles)", 200, "condition"),
                    choice("Très complexe (>8 angles/arrondis)", 320, "condition"),
                    custom("Autre valeur", "condition"),
                ],
            ),
            question(
                "condition",
                "État actuel des murs ?",
                vec![
                    choice("Bon état", 80, "preparation"),
                    choice("Fissures légères", 180, "preparation"),
                    choice("Fissures importantes", 280, "preparation"),
                    choice("Dégâts majeurs", 420, "preparation"),
                ],
            ),
            question(
                "preparation",
                "Préparation nécessaire ?",
                vec![
                    choice("Nettoyage simple", 80, "layers"),
                    choice("Rebouchage léger", 180, "layers"),
                    choice("Rebouchage/ponçage complet", 280, "layers"),
                    choice("Enduit complet", 400, "layers"),
                ],
            ),
            open_question(
                "layers",
                "Nombre de couches de peinture ?",
                vec![
                    choice("1 couche", 0, "type"),
                    choice("2 couches", 120, "type"),
                    choice("3 couches", 220, "type"),
                    choice("4+ couches", 320, "type"),
                    custom("Autre valeur", "type"),
                ],
            ),
            question(
                "type",
                "Type de finition ?",
                vec![
                    choice("Peinture mate", 150, "quality"),
                    choice("Peinture satinée", 250, "quality"),
                    choice("Peinture brillante", 350, "quality"),
                    choice("Revêtement spécial", 450, "quality"),
                ],
            ),
            question(
                "quality",
                "Gamme de produits ?",
                vec![
                    choice("Entrée de gamme", 0, "colors"),
                    choice("Milieu de gamme standard", 150, "colors"),
                    choice("Milieu de gamme premium", 250, "colors"),
                    choice("Haut de gamme", 350, "colors"),
                ],
            ),
            open_question(
                "colors",
                "Nombre de couleurs ?",
                vec![
                    choice("Monochrome", 0, "access"),
                    choice("2 couleurs", 80, "access"),
                    choice("3 couleurs", 150, "access"),
                    choice("4+ couleurs/dégradé", 220, "access"),
                    custom("Autre valeur", "access"),
                ],
            ),
            question(
                "access",
                "Conditions d'accès ?",
                vec![
                    last("Accès facile", 0),
                    last("Escaliers/accès limité", 150),
                    last("Échafaudage nécessaire", 300),
                    last("Accès très difficile", 450),
                ],
            ),
        ],
    )
}

fn floor() -> Category {
    category(
        "floor",
        "Revêtements de sol",
        vec![
            open_question(
                "surface",
                "Surface à couvrir (m²) ?",
                vec![
                    choice("< 20m²", 400, "type"),
                    choice("20-40m²", 700, "type"),
                    choice("40-60m²", 1000, "type"),
                    choice("60-80m²", 1300, "type"),
                    choice("80-100m²", 1600, "type"),
                    choice("> 100m²", 2000, "type"),
                    custom("Autre valeur", "type"),
                ],
            ),
            question(
                "type",
                "Type de revêtement ?",
                vec![
                    choice("Vinyle", 200, "material"),
                    choice("Carrelage standard", 350, "material"),
                    choice("Parquet stratifié", 450, "material"),
                    choice("Parquet massif", 600, "material"),
                    choice("Moquette", 400, "material"),
                ],
            ),
            question(
                "material",
                "Matériau spécifique ?",
                vec![
                    choice("Céramique/PVC", 0, "pattern"),
                    choice("Grès cérame", 150, "pattern"),
                    choice("Pierre naturelle", 300, "pattern"),
                    choice("Bois massif premium", 450, "pattern"),
                    choice("Béton ciré", 600, "pattern"),
                ],
            ),
            question(
                "pattern",
                "Motif/pose spéciale ?",
                vec![
                    choice("Droit standard", 0, "condition"),
                    choice("Diagonal simple", 120, "condition"),
                    choice("Chevrons", 220, "condition"),
                    choice("Motif complexe", 350, "condition"),
                ],
            ),
            question(
                "condition",
                "État du sol actuel ?",
                vec![
                    choice("Prêt à poser", 0, "preparation"),
                    choice("Nettoyage nécessaire", 120, "preparation"),
                    choice("Décapage", 240, "preparation"),
                    choice("Démolition complète", 400, "preparation"),
                ],
            ),
            question(
                "preparation",
                "Travaux préparatoires ?",
                vec![
                    choice("Aucun", 0, "underlay"),
                    choice("Ragréage léger", 180, "underlay"),
                    choice("Nivellement partiel", 300, "underlay"),
                    choice("Nivellement complet", 450, "underlay"),
                ],
            ),
            question(
                "underlay",
                "Sous-couche ?",
                vec![
                    choice("Non", 0, "sealing"),
                    choice("Standard (2mm)", 100, "sealing"),
                    choice("Épaisse (5mm)", 200, "sealing"),
                    choice("Isolante/insonorisante", 300, "sealing"),
                ],
            ),
            question(
                "sealing",
                "Traitement de finition ?",
                vec![
                    choice("Aucun", 0, "furniture"),
                    choice("Imperméabilisation basique", 150, "furniture"),
                    choice("Imperméabilisation renforcée", 250, "furniture"),
                    choice("Traitement spécial", 350, "furniture"),
                ],
            ),
            question(
                "furniture",
                "Gestion du mobilier ?",
                vec![
                    choice("Pièce vide", 0, "access"),
                    choice("Déplacement léger", 150, "access"),
                    choice("Déplacement complet", 300, "access"),
                    choice("Démontage/remontage", 450, "access"),
                ],
            ),
            question(
                "access",
                "Contraintes d'accès ?",
                vec![
                    last("Rez-de-chaussée", 0),
                    last("Étage avec ascenseur", 120),
                    last("Étage sans ascenseur", 240),
                    last("Accès très restreint", 360),
                ],
            ),
        ],
    )
}

fn energy_renovation() -> Category {
    category(
        "energy-renovation",
        "Rénovation Énergétique",
        vec![
            question(
                "building-type",
                "Type de bâtiment ?",
                vec![
                    choice("Appartement", 0, "age"),
                    choice("Maison individuelle", 500, "age"),
                    choice("Bâtiment commercial < 100m²", 1000, "age"),
                    choice("Bâtiment commercial > 100m²", 2000, "age"),
                ],
            ),
            question(
                "age",
                "Année de construction ?",
                vec![
                    choice("Après 2010", 500, "surface"),
                    choice("2000-2010", 1000, "surface"),
                    choice("1980-2000", 1500, "surface"),
                    choice("Avant 1980", 2500, "surface"),
                ],
            ),
            open_question(
                "surface",
                "Surface à rénover (m²) ?",
                vec![
                    choice("< 50m²", 1000, "dpe"),
                    choice("50-75m²", 1800, "dpe"),
                    choice("75-100m²", 2600, "dpe"),
                    choice("100-125m²", 3400, "dpe"),
                    choice("> 125m²", 4500, "dpe"),
                    custom("Autre surface", "dpe"),
                ],
            ),
            question(
                "dpe",
                "Diagnostic actuel (DPE) ?",
                vec![
                    choice("A/B (Déjà performant)", 500, "insulation"),
                    choice("C/D (Moyenne performance)", 1500, "insulation"),
                    choice("E/F (À améliorer)", 3000, "insulation"),
                    choice("G (Passoire thermique)", 5000, "insulation"),
                ],
            ),
            open_question(
                "insulation",
                "Surface à isoler (m²) ?",
                vec![
                    choice("< 30m²", 1500, "walls-insulation"),
                    choice("30-50m²", 2500, "walls-insulation"),
                    choice("50-70m²", 3500, "walls-insulation"),
                    choice("70-100m²", 5000, "walls-insulation"),
                    choice("> 100m²", 7000, "walls-insulation"),
                    custom("Autre surface", "walls-insulation"),
                ],
            ),
            question(
                "walls-insulation",
                "Type isolation murale ?",
                vec![
                    choice("Non nécessaire", 0, "windows"),
                    choice("ITI (Intérieur 5cm)", 1200, "windows"),
                    choice("ITI (Intérieur 10cm)", 2000, "windows"),
                    choice("ITE (Extérieur)", 3500, "windows"),
                ],
            ),
            open_question(
                "windows",
                "Nombre de fenêtres à remplacer ?",
                vec![
                    choice("1-3 fenêtres", 2000, "heating"),
                    choice("4-6 fenêtres", 3500, "heating"),
                    choice("7-9 fenêtres", 5000, "heating"),
                    choice("10-12 fenêtres", 7000, "heating"),
                    choice("> 12 fenêtres", 9000, "heating"),
                    custom("Autre nombre", "heating"),
                ],
            ),
            open_question(
                "heating",
                "Puissance nécessaire (kW) ?",
                vec![
                    choice("< 5 kW", 4000, "ventilation"),
                    choice("5-7 kW", 5500, "ventilation"),
                    choice("7-10 kW", 7500, "ventilation"),
                    choice("10-12 kW", 9000, "ventilation"),
                    choice("> 12 kW", 12000, "ventilation"),
                    custom("Autre puissance", "ventilation"),
                ],
            ),
            question(
                "ventilation",
                "Type de ventilation ?",
                vec![
                    choice("Existant OK", 0, "subsidies"),
                    choice("VMC simple flux", 1500, "subsidies"),
                    choice("VMC double flux standard", 3000, "subsidies"),
                    choice("VMC double flux haut débit", 4500, "subsidies"),
                ],
            ),
            open_question(
                "subsidies",
                "Montant des aides souhaité ?",
                vec![
                    last("MaPrimeRénov' (2000-4000€)", -3000),
                    last("CEE (1000-3000€)", -2000),
                    last("Éco-PTZ", -5000),
                    AnswerOption::custom("Autre montant", None),
                ],
            ),
        ],
    )
}

fn full_renovation() -> Category {
    category(
        "full-renovation",
        "Rénovation Complète",
        vec![
            question(
                "property-type",
                "Type de bien ?",
                vec![
                    choice("Studio", 0, "surface"),
                    choice("Appartement", 2000, "surface"),
                    choice("Maison", 4000, "surface"),
                    choice("Local commercial", 6000, "surface"),
                ],
            ),
            open_question(
                "surface",
                "Surface totale (m²) ?",
                vec![
                    choice("< 30m²", 10000, "state"),
                    choice("30-50m²", 15000, "state"),
                    choice("50-75m²", 22500, "state"),
                    choice("75-100m²", 30000, "state"),
                    choice("100-125m²", 40000, "state"),
                    choice("> 125m²", 50000, "state"),
                    custom("Autre surface", "state"),
                ],
            ),
            question(
                "state",
                "État actuel ?",
                vec![
                    choice("À rafraîchir", 3000, "electric"),
                    choice("À restructurer partiellement", 10000, "electric"),
                    choice("À restructurer complètement", 20000, "electric"),
                    choice("À démolir partiellement", 30000, "electric"),
                ],
            ),
            open_question(
                "electric",
                "Nombre de prises à installer ?",
                vec![
                    choice("1-5 prises", 2000, "plumbing"),
                    choice("6-10 prises", 4000, "plumbing"),
                    choice("11-15 prises", 6000, "plumbing"),
                    choice("16-20 prises", 8000, "plumbing"),
                    choice("> 20 prises", 12000, "plumbing"),
                    custom("Autre nombre", "plumbing"),
                ],
            ),
            open_question(
                "plumbing",
                "Nombre de points d'eau ?",
                vec![
                    choice("1-2 points", 4000, "kitchen"),
                    choice("3-4 points", 8000, "kitchen"),
                    choice("5-6 points", 12000, "kitchen"),
                    choice("> 6 points", 18000, "kitchen"),
                    custom("Autre nombre", "kitchen"),
                ],
            ),
            open_question(
                "kitchen",
                "Surface cuisine (m²) ?",
                vec![
                    choice("< 6m²", 5000, "bathroom"),
                    choice("6-8m²", 7500, "bathroom"),
                    choice("8-10m²", 10000, "bathroom"),
                    choice("10-12m²", 12500, "bathroom"),
                    choice("> 12m²", 15000, "bathroom"),
                    custom("Autre surface", "bathroom"),
                ],
            ),
            open_question(
                "bathroom",
                "Nombre de salles de bain ?",
                vec![
                    choice("1 salle de bain", 8000, "floor"),
                    choice("1 SdB + 1 WC", 12000, "floor"),
                    choice("2 salles de bain", 18000, "floor"),
                    choice("> 2 salles de bain", 25000, "floor"),
                    custom("Autre nombre", "floor"),
                ],
            ),
            open_question(
                "floor",
                "Surface à carreler/parqueter (m²) ?",
                vec![
                    choice("< 20m²", 5000, "walls"),
                    choice("20-30m²", 7000, "walls"),
                    choice("30-40m²", 9000, "walls"),
                    choice("40-50m²", 12000, "walls"),
                    choice("> 50m²", 15000, "walls"),
                    custom("Autre surface", "walls"),
                ],
            ),
            open_question(
                "walls",
                "Surface murale à traiter (m²) ?",
                vec![
                    choice("< 40m²", 4000, "ceiling"),
                    choice("40-50m²", 5500, "ceiling"),
                    choice("50-60m²", 7000, "ceiling"),
                    choice("60-70m²", 8500, "ceiling"),
                    choice("> 70m²", 11000, "ceiling"),
                    custom("Autre surface", "ceiling"),
                ],
            ),
            open_question(
                "ceiling",
                "Surface des plafonds (m²) ?",
                vec![
                    choice("< 30m²", 2000, "windows"),
                    choice("30-40m²", 3000, "windows"),
                    choice("40-50m²", 4000, "windows"),
                    choice("50-60m²", 5000, "windows"),
                    choice("> 60m²", 7000, "windows"),
                    custom("Autre surface", "windows"),
                ],
            ),
            open_question(
                "windows",
                "Nombre de fenêtres ?",
                vec![
                    choice("1-3 fenêtres", 5000, "thermal"),
                    choice("4-6 fenêtres", 9000, "thermal"),
                    choice("7-9 fenêtres", 12000, "thermal"),
                    choice("10-12 fenêtres", 16000, "thermal"),
                    choice("> 12 fenêtres", 20000, "thermal"),
                    custom("Autre nombre", "thermal"),
                ],
            ),
            open_question(
                "thermal",
                "Surface à isoler (m²) ?",
                vec![
                    choice("< 40m²", 8000, "heating"),
                    choice("40-50m²", 10000, "heating"),
                    choice("50-60m²", 12000, "heating"),
                    choice("60-70m²", 15000, "heating"),
                    choice("> 70m²", 20000, "heating"),
                    custom("Autre surface", "heating"),
                ],
            ),
            open_question(
                "heating",
                "Puissance chauffage (kW) ?",
                vec![
                    choice("< 8 kW", 8000, "lighting"),
                    choice("8-10 kW", 10000, "lighting"),
                    choice("10-12 kW", 12000, "lighting"),
                    choice("12-14 kW", 15000, "lighting"),
                    choice("> 14 kW", 18000, "lighting"),
                    custom("Autre puissance", "lighting"),
                ],
            ),
            open_question(
                "lighting",
                "Nombre de points lumineux ?",
                vec![
                    choice("1-5 points", 3000, "furniture"),
                    choice("6-10 points", 5000, "furniture"),
                    choice("11-15 points", 7000, "furniture"),
                    choice("16-20 points", 9000, "furniture"),
                    choice("> 20 points", 12000, "furniture"),
                    custom("Autre nombre", "furniture"),
                ],
            ),
            open_question(
                "furniture",
                "Budget mobilier sur mesure ?",
                vec![
                    last("< 3000€", 3000),
                    last("3000-5000€", 5000),
                    last("5000-7000€", 7000),
                    last("7000-10000€", 10000),
                    last("> 10000€", 15000),
                    AnswerOption::custom("Autre budget", None),
                ],
            ),
        ],
    )
}

fn electricity() -> Category {
    category(
        "electricity",
        "Installation électrique",
        vec![
            question(
                "scope",
                "Type d'intervention ?",
                vec![
                    choice("Dépannage simple", 150, "panel"),
                    choice("Ajout de circuits", 400, "panel"),
                    choice("Mise aux normes", 800, "panel"),
                    choice("Installation neuve", 1500, "panel"),
                ],
            ),
            question(
                "panel",
                "Tableau électrique ?",
                vec![
                    choice("Existant OK", 0, "outlets"),
                    choice("Modernisation partielle", 300, "outlets"),
                    choice("Modernisation complète", 600, "outlets"),
                    choice("Nouvelle installation", 1000, "outlets"),
                ],
            ),
            open_question(
                "outlets",
                "Nombre de prises à installer ?",
                vec![
                    choice("1-3 prises", 150, "lighting"),
                    choice("4-6 prises", 300, "lighting"),
                    choice("7-9 prises", 450, "lighting"),
                    choice("10-12 prises", 600, "lighting"),
                    choice("> 12 prises", 800, "lighting"),
                    custom("Autre valeur", "lighting"),
                ],
            ),
            open_question(
                "lighting",
                "Points lumineux ?",
                vec![
                    choice("1-3 points", 150, "wiring"),
                    choice("4-6 points", 300, "wiring"),
                    choice("7-9 points", 450, "wiring"),
                    choice("10-12 points", 600, "wiring"),
                    choice("> 12 points", 800, "wiring"),
                    custom("Autre valeur", "wiring"),
                ],
            ),
            question(
                "wiring",
                "Type de câblage ?",
                vec![
                    choice("Apparent simple", 0, "voltage"),
                    choice("Apparent gainé", 150, "voltage"),
                    choice("Encastré simple", 250, "voltage"),
                    choice("Encastré complexe", 400, "voltage"),
                ],
            ),
            open_question(
                "voltage",
                "Besoins en puissance ?",
                vec![
                    choice("Basique (6kVA)", 0, "automation"),
                    choice("Standard (9kVA)", 200, "automation"),
                    choice("Confort (12kVA)", 400, "automation"),
                    choice("Haute puissance (15kVA+)", 600, "automation"),
                    custom("Autre valeur", "automation"),
                ],
            ),
            question(
                "automation",
                "Domotique ?",
                vec![
                    choice("Aucune", 0, "safety"),
                    choice("Partielle (éclairage)", 300, "safety"),
                    choice("Partielle (prises)", 500, "safety"),
                    choice("Complète", 900, "safety"),
                ],
            ),
            question(
                "safety",
                "Sécurité électrique ?",
                vec![
                    choice("Standard", 0, "walls"),
                    choice("Renforcée", 150, "walls"),
                    choice("Haute sécurité", 300, "walls"),
                    choice("Protection complète", 500, "walls"),
                ],
            ),
            question(
                "walls",
                "Type de murs ?",
                vec![
                    choice("Plaque de plâtre", 0, "access"),
                    choice("Brique/parpaing", 100, "access"),
                    choice("Béton armé léger", 200, "access"),
                    choice("Béton armé dense", 350, "access"),
                ],
            ),
            question(
                "access",
                "Accessibilité ?",
                vec![
                    last("Facile", 0),
                    last("Passage technique", 150),
                    last("Combles/caves", 300),
                    last("Locaux techniques", 450),
                ],
            ),
        ],
    )
}

fn plumbing() -> Category {
    category(
        "plumbing",
        "Plomberie & Sanitaire",
        vec![
            question(
                "type",
                "Nature des travaux ?",
                vec![
                    choice("Réparation simple", 150, "scope"),
                    choice("Remplacement équipement", 400, "scope"),
                    choice("Rénovation complète", 800, "scope"),
                    choice("Installation neuve", 1200, "scope"),
                ],
            ),
            question(
                "scope",
                "Éléments concernés ?",
                vec![
                    choice("1 point d'eau", 200, "pipes"),
                    choice("Cuisine", 600, "pipes"),
                    choice("Salle de bain", 1000, "pipes"),
                    choice("Maison complète", 1800, "pipes"),
                ],
            ),
            question(
                "pipes",
                "Type de tuyauterie ?",
                vec![
                    choice("PVC", 0, "water"),
                    choice("PER", 150, "water"),
                    choice("Cuivre standard", 250, "water"),
                    choice("Cuivre renforcé", 400, "water"),
                ],
            ),
            question(
                "water",
                "Alimentation eau chaude ?",
                vec![
                    choice("Ballon électrique 50L", 200, "heating"),
                    choice("Ballon électrique 100L+", 400, "heating"),
                    choice("Chaudière gaz standard", 600, "heating"),
                    choice("Thermodynamique", 900, "heating"),
                ],
            ),
            question(
                "heating",
                "Système de chauffage ?",
                vec![
                    choice("Aucun", 0, "fixtures"),
                    choice("Radiateurs standard", 600, "fixtures"),
                    choice("Radiateurs haute performance", 1000, "fixtures"),
                    choice("Plancher chauffant", 1500, "fixtures"),
                ],
            ),
            open_question(
                "fixtures",
                "Équipements à installer ?",
                vec![
                    choice("Lavabo simple", 200, "sewage"),
                    choice("Douche standard", 400, "sewage"),
                    choice("Baignoire", 600, "sewage"),
                    choice("Sanitaire complet", 900, "sewage"),
                    custom("Autre valeur", "sewage"),
                ],
            ),
            question(
                "sewage",
                "Évacuation des eaux ?",
                vec![
                    choice("Existante OK", 0, "insulation"),
                    choice("Modifications légères", 200, "insulation"),
                    choice("Modifications importantes", 400, "insulation"),
                    choice("Nouveau réseau", 700, "insulation"),
                ],
            ),
            question(
                "insulation",
                "Isolation tuyaux ?",
                vec![
                    choice("Non nécessaire", 0, "walls"),
                    choice("Partielle (points sensibles)", 100, "walls"),
                    choice("Standard", 200, "walls"),
                    choice("Complète/haute performance", 350, "walls"),
                ],
            ),
            question(
                "walls",
                "Type de percement ?",
                vec![
                    choice("Aucun", 0, "access"),
                    choice("Simple (placo)", 150, "access"),
                    choice("Moyen (brique)", 300, "access"),
                    choice("Complexe (béton armé)", 500, "access"),
                ],
            ),
            question(
                "access",
                "Accès technique ?",
                vec![
                    last("Facile", 0),
                    last("Espace restreint", 200),
                    last("Sous-sol/cave", 400),
                    last("Accès très difficile", 600),
                ],
            ),
        ],
    )
}

fn heating() -> Category {
    category(
        "heating",
        "Chauffage & Climatisation",
        vec![
            question(
                "system",
                "Type de système ?",
                vec![
                    choice("Radiateurs électriques", 2000, "fuel"),
                    choice("Radiateurs eau chaude", 3500, "fuel"),
                    choice("Pompe à chaleur air/air", 6000, "fuel"),
                    choice("Pompe à chaleur air/eau", 9000, "fuel"),
                    choice("Climatisation réversible", 5000, "fuel"),
                ],
            ),
            question(
                "fuel",
                "Énergie utilisée ?",
                vec![
                    choice("Électrique", 0, "zones"),
                    choice("Gaz", 800, "zones"),
                    choice("Fioul", 500, "zones"),
                    choice("Géothermie", 1500, "zones"),
                ],
            ),
            open_question(
                "zones",
                "Nombre de zones ?",
                vec![
                    choice("1 zone", 0, "surface"),
                    choice("2 zones", 500, "surface"),
                    choice("3 zones", 800, "surface"),
                    choice("4 zones", 1100, "surface"),
                    choice("> 4 zones", 1500, "surface"),
                    custom("Autre valeur", "surface"),
                ],
            ),
            open_question(
                "surface",
                "Surface à chauffer (m²) ?",
                vec![
                    choice("< 40m²", 800, "existing"),
                    choice("40-60m²", 1200, "existing"),
                    choice("60-80m²", 1600, "existing"),
                    choice("80-100m²", 2000, "existing"),
                    choice("> 100m²", 2500, "existing"),
                    custom("Autre valeur", "existing"),
                ],
            ),
            question(
                "existing",
                "Installation existante ?",
                vec![
                    choice("Nouvelle installation", 0, "regulation"),
                    choice("Remplacement partiel", -800, "regulation"),
                    choice("Modernisation complète", 300, "regulation"),
                    choice("Dépannage", -500, "regulation"),
                ],
            ),
            question(
                "regulation",
                "Système de régulation ?",
                vec![
                    choice("Manuel", 0, "efficiency"),
                    choice("Thermostat programmable", 200, "efficiency"),
                    choice("Thermostat connecté", 400, "efficiency"),
                    choice("Système intelligent", 700, "efficiency"),
                ],
            ),
            question(
                "efficiency",
                "Classe énergétique ?",
                vec![
                    choice("Standard", 0, "distribution"),
                    choice("A", 300, "distribution"),
                    choice("A+", 500, "distribution"),
                    choice("A++ ou mieux", 800, "distribution"),
                ],
            ),
            question(
                "distribution",
                "Type de distribution ?",
                vec![
                    choice("Air", 0, "installation"),
                    choice("Eau basse température", 200, "installation"),
                    choice("Eau haute température", 400, "installation"),
                    choice("Mixte air/eau", 600, "installation"),
                ],
            ),
            question(
                "installation",
                "Complexité d'installation ?",
                vec![
                    choice("Standard", 0, "access"),
                    choice("Technique (gainage)", 400, "access"),
                    choice("Très technique (perçage)", 800, "access"),
                    choice("Installation complexe", 1200, "access"),
                ],
            ),
            question(
                "access",
                "Accès technique ?",
                vec![
                    last("Facile", 0),
                    last("Toiture/combles", 300),
                    last("Sous-sol étroit", 500),
                    last("Accès très difficile", 800),
                ],
            ),
        ],
    )
}

fn joinery() -> Category {
    category(
        "joinery",
        "Menuiserie",
        vec![
            question(
                "type",
                "Type de menuiserie ?",
                vec![
                    choice("Fenêtre standard", 0, "material"),
                    choice("Porte-fenêtre", 300, "material"),
                    choice("Porte d'entrée", 500, "material"),
                    choice("Volet battant", 400, "material"),
                    choice("Volet roulant", 600, "material"),
                    choice("Fenêtre de toit", 800, "material"),
                ],
            ),
            question(
                "material",
                "Matériau ?",
                vec![
                    choice("PVC", 0, "dimensions"),
                    choice("Aluminium", 300, "dimensions"),
                    choice("Bois", 500, "dimensions"),
                    choice("Mixte (bois/aluminium)", 400, "dimensions"),
                ],
            ),
            open_question(
                "dimensions",
                "Dimensions (m²) ?",
                vec![
                    choice("< 1m²", 500, "glazing"),
                    choice("1-1.5m²", 800, "glazing"),
                    choice("1.5-2m²", 1100, "glazing"),
                    choice("2-2.5m²", 1400, "glazing"),
                    choice("> 2.5m²", 1800, "glazing"),
                    custom("Autre dimension", "glazing"),
                ],
            ),
            question(
                "glazing",
                "Type de vitrage ?",
                vec![
                    choice("Simple vitrage", 0, "thermal"),
                    choice("Double vitrage standard", 300, "thermal"),
                    choice("Double vitrage argon", 500, "thermal"),
                    choice("Triple vitrage", 800, "thermal"),
                ],
            ),
            question(
                "thermal",
                "Performance thermique ?",
                vec![
                    choice("Standard", 0, "opening"),
                    choice("BBC", 200, "opening"),
                    choice("RT2012", 400, "opening"),
                    choice("Passive House", 600, "opening"),
                ],
            ),
            question(
                "opening",
                "Type d'ouverture ?",
                vec![
                    choice("Fixé", 0, "color"),
                    choice("Battant", 150, "color"),
                    choice("Coulissant", 250, "color"),
                    choice("Oscillo-battant", 350, "color"),
                ],
            ),
            question(
                "color",
                "Couleur/finition ?",
                vec![
                    choice("Blanc standard", 0, "count"),
                    choice("Couleur unie", 150, "count"),
                    choice("Bois naturel", 300, "count"),
                    choice("Finition spéciale", 450, "count"),
                ],
            ),
            open_question(
                "count",
                "Nombre d'éléments ?",
                vec![
                    choice("1 élément", 0, "installation"),
                    choice("2-3 éléments", 200, "installation"),
                    choice("4-5 éléments", 400, "installation"),
                    choice("6-8 éléments", 600, "installation"),
                    choice("> 8 éléments", 900, "installation"),
                    custom("Autre nombre", "installation"),
                ],
            ),
            question(
                "installation",
                "Type d'installation ?",
                vec![
                    choice("Remplacement simple", 0, "access"),
                    choice("Nouvelle ouverture", 500, "access"),
                    choice("Démolition/reconstruction", 1000, "access"),
                    choice("Sur mesure complexe", 1500, "access"),
                ],
            ),
            question(
                "access",
                "Accessibilité ?",
                vec![
                    last("Rez-de-chaussée", 0),
                    last("Étage facile", 200),
                    last("Étage difficile", 400),
                    last("Toiture/hauteur", 600),
                ],
            ),
        ],
    )
}

fn security() -> Category {
    category(
        "security",
        "Sécurité & Domotique",
        vec![
            question(
                "type",
                "Type de système ?",
                vec![
                    choice("Alarme simple", 600, "coverage"),
                    choice("Alarme complète", 1200, "coverage"),
                    choice("Vidéosurveillance basique", 1000, "coverage"),
                    choice("Vidéosurveillance complète", 2000, "coverage"),
                    choice("Système intégré", 2500, "coverage"),
                ],
            ),
            question(
                "coverage",
                "Zone à couvrir ?",
                vec![
                    choice("1 entrée", 200, "devices"),
                    choice("Appartement", 600, "devices"),
                    choice("Maison", 1000, "devices"),
                    choice("Propriété complète", 1500, "devices"),
                ],
            ),
            open_question(
                "devices",
                "Nombre de dispositifs ?",
                vec![
                    choice("1-2 éléments", 300, "connectivity"),
                    choice("3-4 éléments", 500, "connectivity"),
                    choice("5-6 éléments", 700, "connectivity"),
                    choice("7-8 éléments", 900, "connectivity"),
                    choice("> 8 éléments", 1200, "connectivity"),
                    custom("Autre valeur", "connectivity"),
                ],
            ),
            question(
                "connectivity",
                "Connectivité ?",
                vec![
                    choice("Autonome", 0, "monitoring"),
                    choice("WiFi basique", 150, "monitoring"),
                    choice("WiFi sécurisé", 300, "monitoring"),
                    choice("Filaire professionnel", 500, "monitoring"),
                ],
            ),
            question(
                "monitoring",
                "Surveillance ?",
                vec![
                    choice("Locale", 0, "automation"),
                    choice("Télé surveillance basique", 200, "automation"),
                    choice("Télé surveillance avancée", 400, "automation"),
                    choice("Centrale professionnelle", 700, "automation"),
                ],
            ),
            question(
                "automation",
                "Intégration domotique ?",
                vec![
                    choice("Aucune", 0, "security"),
                    choice("Partielle (éclairage)", 300, "security"),
                    choice("Partielle (accès)", 500, "security"),
                    choice("Complète", 900, "security"),
                ],
            ),
            question(
                "security",
                "Niveau de sécurité ?",
                vec![
                    choice("Standard", 0, "redundancy"),
                    choice("Renforcé", 200, "redundancy"),
                    choice("Haute sécurité", 400, "redundancy"),
                    choice("Professionnel", 700, "redundancy"),
                ],
            ),
            question(
                "redundancy",
                "Système de secours ?",
                vec![
                    choice("Non", 0, "installation"),
                    choice("Batterie 24h", 150, "installation"),
                    choice("Batterie 72h", 300, "installation"),
                    choice("Double alimentation", 500, "installation"),
                ],
            ),
            question(
                "installation",
                "Type d'installation ?",
                vec![
                    choice("Autonome", 0, "access"),
                    choice("Semi-professionnelle", 200, "access"),
                    choice("Professionnelle standard", 400, "access"),
                    choice("Professionnelle haut de gamme", 700, "access"),
                ],
            ),
            question(
                "access",
                "Accès technique ?",
                vec![
                    last("Facile", 0),
                    last("Passage de câbles", 150),
                    last("Installation moyenne", 300),
                    last("Installation complexe", 500),
                ],
            ),
        ],
    )
}
