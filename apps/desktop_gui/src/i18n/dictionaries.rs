//! Flat per-language dictionaries for every rendered string.

pub(super) const IT: &[(&str, &str)] = &[
    ("tagline", "Il mercato immobiliare, analizzato dall'intelligenza artificiale."),
    ("hero_badge", "AI · Real Estate · Market Intelligence"),
    ("login", "Accedi"),
    ("register", "Registrati"),
    ("or", "oppure"),
    ("continue_google", "Continua con Google"),
    ("email", "Email"),
    ("password", "Password"),
    ("name", "Nome completo"),
    ("name_ph", "Mario Rossi"),
    ("email_ph", "email@esempio.com"),
    ("pass_ph", "••••••••"),
    ("have_account", "Hai già un account?"),
    ("no_account", "Non hai un account?"),
    ("choose_plan", "Scegli il tuo piano"),
    ("plan_sub", "Potenzia le tue ricerche immobiliari con l'AI"),
    ("monthly", "Mensile"),
    ("yearly", "Annuale"),
    ("save_yearly", "Risparmia 20%"),
    ("free_plan", "Free"),
    ("pro_plan", "Pro"),
    ("plus_plan", "Plus"),
    ("free_desc", "Per iniziare ad esplorare"),
    ("pro_desc", "Per professionisti"),
    ("plus_desc", "Per chi vuole tutto"),
    ("continue_with", "Continua con"),
    ("start_free", "Inizia gratis"),
    ("per_month", "/ mese"),
    ("per_year", "/ anno"),
    ("popular", "🔥 POPOLARE"),
    ("add_card", "Inserisci i dati della carta"),
    ("card_sub", "Piano"),
    ("card_num", "Numero carta"),
    ("expiry", "Scadenza"),
    ("cvv", "CVV"),
    ("card_num_ph", "1234 5678 9012 3456"),
    ("expiry_ph", "MM/AA"),
    ("activate", "Attiva abbonamento"),
    ("skip_card", "Continua in modalità Free"),
    ("ff1", "Ricerca base illimitata"),
    ("ff2", "Dati di mercato generali"),
    ("ff3", "1 report al mese"),
    ("fnd", "Deep Research"),
    ("fnc", "Calcola"),
    ("fp1", "Tutto il piano Free"),
    ("fp2", "Deep Research (2/giorno)"),
    ("fp3", "Calcola (2/giorno)"),
    ("fp4", "Report illimitati"),
    ("fp5", "Export Excel & Word"),
    ("fpl1", "Tutto il piano Pro"),
    ("fpl2", "Deep Research illimitato"),
    ("fpl3", "Calcola illimitato"),
    ("fpl4", "Accesso API"),
    ("fpl5", "Supporto prioritario"),
    ("ricerca", "Ricerca"),
    ("deepresearch", "Deep Research"),
    ("calcola", "Calcola"),
    ("all_plans", "Tutti i piani"),
    ("pro_feat", "2 al giorno · Pro | Illimitato · Plus"),
    ("settings", "Impostazioni"),
    ("welcome", "Benvenuto"),
    ("active_plan", "Piano attivo"),
    ("upg_to_pro", "↑ Upgrade a Pro"),
    ("upg_to_plus", "↑ Upgrade a Plus"),
    ("search_ph", "Cerca nel mercato immobiliare..."),
    ("dash_title", "Cosa vuoi analizzare oggi?"),
    ("dash_sub", "BIG HOUSE analizza il mercato immobiliare in tempo reale con intelligenza artificiale."),
    ("analyze", "Analizza →"),
    ("sug1", "Milano residenziale"),
    ("sug2", "Roma prezzi €/mq"),
    ("sug3", "Affitti brevi Napoli"),
    ("sug4", "Mutui 2025"),
    ("deep_title", "Analisi approfondita multi-sorgente con DeepSeek AI."),
    ("deep_usage", "Utilizzi rimanenti oggi:"),
    ("deep_unlimited", "Ricerche illimitate."),
    ("deep_ph", "Es: 'Cercami una casa da ristrutturare a Parigi centro, 110mq, ROI 22%'"),
    ("start_deep", "🚀 Avvia Deep Research"),
    ("calc_sub", "Calcola rendimenti reali, costi ristrutturazione e ROI."),
    ("calc_unlimited", "Calcoli illimitati."),
    ("calc_usage", "Utilizzi rimanenti oggi:"),
    ("buy_price", "Prezzo acquisto (€)"),
    ("surface", "Superficie (mq)"),
    ("city", "Città"),
    ("buy_ph", "250000"),
    ("surf_ph", "80"),
    ("city_ph", "Milano"),
    ("calc_btn", "🧮 Calcola ROI Reale"),
    ("upgrade_title", "Funzione riservata"),
    ("upgrade_msg", "Questa funzione richiede un piano Pro o superiore."),
    ("upgrade_cta", "Passa a Pro"),
    ("limit_title", "Limite giornaliero raggiunto"),
    ("limit_msg", "Hai raggiunto il limite giornaliero. Passa a Plus per ricerche illimitate."),
    ("upg_plus", "→ Plus"),
    ("cancel", "Annulla"),
    ("close", "Chiudi"),
    ("logout", "Esci"),
    ("pro_only", "Solo Pro e Plus"),
    ("error", "Errore"),
    ("loading", "Caricamento..."),
    ("auth_error", "Email o password errati"),
    ("renov_lvl", "Livello Ristrutturazione"),
    ("low", "Basso (Economico)"),
    ("med", "Medio (Standard)"),
    ("high", "Alto (Lusso)"),
    ("renovation_cost", "Costo Ristrutturazione"),
    ("estimated_value", "Valore Finale Stimato"),
    ("estimated_roi", "ROI Stimato"),
    ("works_duration", "Tempi Cantiere"),
    ("months", "Mesi"),
    ("download_report", "📄 Scarica Report Completo (.docx)"),
    ("report_saved", "Report salvato"),
    ("network_error", "Errore di connessione al server."),
    ("registration_failed", "Registrazione non riuscita"),
    ("upgrade_success", "Piano attivato con successo! 🎉"),
    ("upgrade_failed", "Errore durante l'attivazione"),
    ("unknown_error", "Errore sconosciuto"),
    ("session_expired", "Sessione scaduta, accedi di nuovo"),
    ("not_logged_in", "Errore: Non sei loggato!"),
    ("dashboard", "Dashboard"),
    ("google_opened", "Completa l'accesso nel browser"),
];

pub(super) const EN: &[(&str, &str)] = &[
    ("tagline", "The real estate market, analyzed by artificial intelligence."),
    ("hero_badge", "AI · Real Estate · Market Intelligence"),
    ("login", "Sign In"),
    ("register", "Sign Up"),
    ("or", "or"),
    ("continue_google", "Continue with Google"),
    ("email", "Email"),
    ("password", "Password"),
    ("name", "Full Name"),
    ("name_ph", "John Smith"),
    ("email_ph", "email@example.com"),
    ("pass_ph", "••••••••"),
    ("have_account", "Already have an account?"),
    ("no_account", "Don't have an account?"),
    ("choose_plan", "Choose your plan"),
    ("plan_sub", "Power your real estate research with AI"),
    ("monthly", "Monthly"),
    ("yearly", "Yearly"),
    ("save_yearly", "Save 20%"),
    ("free_plan", "Free"),
    ("pro_plan", "Pro"),
    ("plus_plan", "Plus"),
    ("free_desc", "Start exploring"),
    ("pro_desc", "For professionals"),
    ("plus_desc", "For power users"),
    ("continue_with", "Continue with"),
    ("start_free", "Start for free"),
    ("per_month", "/ month"),
    ("per_year", "/ year"),
    ("popular", "🔥 POPULAR"),
    ("add_card", "Enter your card details"),
    ("card_sub", "Plan"),
    ("card_num", "Card number"),
    ("expiry", "Expiry"),
    ("cvv", "CVV"),
    ("card_num_ph", "1234 5678 9012 3456"),
    ("expiry_ph", "MM/YY"),
    ("activate", "Activate subscription"),
    ("skip_card", "Continue with Free plan"),
    ("ff1", "Unlimited basic search"),
    ("ff2", "General market data"),
    ("ff3", "1 report per month"),
    ("fnd", "Deep Research"),
    ("fnc", "Calculate"),
    ("fp1", "Everything in Free"),
    ("fp2", "Deep Research (2/day)"),
    ("fp3", "Calculate (2/day)"),
    ("fp4", "Unlimited reports"),
    ("fp5", "Excel & Word export"),
    ("fpl1", "Everything in Pro"),
    ("fpl2", "Unlimited Deep Research"),
    ("fpl3", "Unlimited calculations"),
    ("fpl4", "API access"),
    ("fpl5", "Priority support"),
    ("ricerca", "Search"),
    ("deepresearch", "Deep Research"),
    ("calcola", "Calculate"),
    ("all_plans", "All plans"),
    ("pro_feat", "2/day · Pro | Unlimited · Plus"),
    ("settings", "Settings"),
    ("welcome", "Welcome"),
    ("active_plan", "Active plan"),
    ("upg_to_pro", "↑ Upgrade to Pro"),
    ("upg_to_plus", "↑ Upgrade to Plus"),
    ("search_ph", "Search the real estate market..."),
    ("dash_title", "What would you like to analyze today?"),
    ("dash_sub", "BIG HOUSE analyzes the real estate market in real time with artificial intelligence."),
    ("analyze", "Analyze →"),
    ("sug1", "Milan residential"),
    ("sug2", "Rome prices €/sqm"),
    ("sug3", "Short rentals Naples"),
    ("sug4", "Mortgages 2025"),
    ("deep_title", "In-depth multi-source analysis with DeepSeek AI."),
    ("deep_usage", "Remaining today:"),
    ("deep_unlimited", "Unlimited searches."),
    ("deep_ph", "Ex: 'Find a house to renovate in Paris center, 110sqm, 22% ROI'"),
    ("start_deep", "🚀 Start Deep Research"),
    ("calc_sub", "Calculate real returns, renovation costs and ROI."),
    ("calc_unlimited", "Unlimited calculations."),
    ("calc_usage", "Remaining today:"),
    ("buy_price", "Purchase price (€)"),
    ("surface", "Surface (sqm)"),
    ("city", "City"),
    ("buy_ph", "250000"),
    ("surf_ph", "80"),
    ("city_ph", "London"),
    ("calc_btn", "🧮 Calculate Real ROI"),
    ("upgrade_title", "Feature locked"),
    ("upgrade_msg", "This feature requires a Pro plan or higher."),
    ("upgrade_cta", "Upgrade to Pro"),
    ("limit_title", "Daily limit reached"),
    ("limit_msg", "You've reached the daily limit. Upgrade to Plus for unlimited access."),
    ("upg_plus", "→ Plus"),
    ("cancel", "Cancel"),
    ("close", "Close"),
    ("logout", "Sign out"),
    ("pro_only", "Pro & Plus only"),
    ("error", "Error"),
    ("loading", "Loading..."),
    ("auth_error", "Invalid email or password"),
    ("renov_lvl", "Renovation Level"),
    ("low", "Low (Budget)"),
    ("med", "Medium (Standard)"),
    ("high", "High (Luxury)"),
    ("renovation_cost", "Renovation cost"),
    ("estimated_value", "Estimated final value"),
    ("estimated_roi", "Estimated ROI"),
    ("works_duration", "Works duration"),
    ("months", "Months"),
    ("download_report", "📄 Download full report (.docx)"),
    ("report_saved", "Report saved"),
    ("network_error", "Could not reach the server."),
    ("registration_failed", "Registration failed"),
    ("upgrade_success", "Plan activated successfully! 🎉"),
    ("upgrade_failed", "Activation failed"),
    ("unknown_error", "Unknown error"),
    ("session_expired", "Session expired, please sign in again"),
    ("not_logged_in", "Error: you are not signed in!"),
    ("dashboard", "Dashboard"),
    ("google_opened", "Finish signing in in your browser"),
];

pub(super) const FR: &[(&str, &str)] = &[
    ("tagline", "Le marché immobilier analysé par l'IA."),
    ("hero_badge", "AI · Immobilier · Intelligence"),
    ("login", "Connexion"),
    ("register", "S'inscrire"),
    ("or", "ou"),
    ("continue_google", "Continuer avec Google"),
    ("email", "Email"),
    ("password", "Mot de passe"),
    ("name", "Nom complet"),
    ("name_ph", "Jean Dupont"),
    ("email_ph", "email@exemple.com"),
    ("pass_ph", "••••••••"),
    ("have_account", "Déjà un compte ?"),
    ("no_account", "Pas de compte ?"),
    ("choose_plan", "Choisir un plan"),
    ("plan_sub", "Boostez vos recherches avec l'IA"),
    ("monthly", "Mensuel"),
    ("yearly", "Annuel"),
    ("save_yearly", "-20%"),
    ("free_plan", "Gratuit"),
    ("pro_plan", "Pro"),
    ("plus_plan", "Plus"),
    ("free_desc", "Pour commencer"),
    ("pro_desc", "Pour les pros"),
    ("plus_desc", "Pour les experts"),
    ("continue_with", "Continuer avec"),
    ("start_free", "Commencer gratuitement"),
    ("per_month", "/ mois"),
    ("per_year", "/ an"),
    ("popular", "🔥 POPULAIRE"),
    ("add_card", "Détails de la carte"),
    ("card_sub", "Plan"),
    ("card_num", "Numéro de carte"),
    ("expiry", "Expiration"),
    ("cvv", "CVV"),
    ("card_num_ph", "1234..."),
    ("expiry_ph", "MM/AA"),
    ("activate", "Activer"),
    ("skip_card", "Continuer en gratuit"),
    ("ff1", "Recherche illimitée"),
    ("ff2", "Données marché"),
    ("ff3", "1 rapport/mois"),
    ("fnd", "Deep Research"),
    ("fnc", "Calculer"),
    ("fp1", "Tout du plan Gratuit"),
    ("fp2", "Deep Research (2/jour)"),
    ("fp3", "Calculer (2/jour)"),
    ("fp4", "Rapports illimités"),
    ("fp5", "Export Excel"),
    ("fpl1", "Tout du plan Pro"),
    ("fpl2", "Deep Research illimité"),
    ("fpl3", "Calculs illimités"),
    ("fpl4", "API"),
    ("fpl5", "Support prioritaire"),
    ("ricerca", "Recherche"),
    ("deepresearch", "Deep Research"),
    ("calcola", "Calculer"),
    ("all_plans", "Tous les plans"),
    ("pro_feat", "2/jour · Pro | Illimité · Plus"),
    ("settings", "Paramètres"),
    ("welcome", "Bienvenue"),
    ("active_plan", "Plan actif"),
    ("upg_to_pro", "↑ Passer à Pro"),
    ("upg_to_plus", "↑ Passer à Plus"),
    ("search_ph", "Rechercher..."),
    ("dash_title", "Que voulez-vous analyser ?"),
    ("dash_sub", "Analyse en temps réel par IA."),
    ("analyze", "Analyser →"),
    ("sug1", "Paris résidentiel"),
    ("sug2", "Lyon prix m²"),
    ("sug3", "Location Nice"),
    ("sug4", "Taux 2025"),
    ("deep_title", "Analyse approfondie IA."),
    ("deep_usage", "Restant aujourd'hui :"),
    ("deep_unlimited", "Illimité."),
    ("deep_ph", "Ex: 'Maison à rénover Paris centre, 110m2, ROI 22%'"),
    ("start_deep", "🚀 Lancer"),
    ("calc_sub", "Calcul ROI réel et rénovation."),
    ("calc_unlimited", "Illimité."),
    ("calc_usage", "Restant :"),
    ("buy_price", "Prix achat (€)"),
    ("surface", "Surface (m²)"),
    ("city", "Ville"),
    ("buy_ph", "250000"),
    ("surf_ph", "80"),
    ("city_ph", "Paris"),
    ("calc_btn", "🧮 Calculer ROI"),
    ("upgrade_title", "Fonction bloquée"),
    ("upgrade_msg", "Nécessite un plan Pro."),
    ("upgrade_cta", "Passer à Pro"),
    ("limit_title", "Limite atteinte"),
    ("limit_msg", "Passez à Plus pour l'illimité."),
    ("upg_plus", "→ Plus"),
    ("cancel", "Annuler"),
    ("close", "Fermer"),
    ("logout", "Déconnexion"),
    ("pro_only", "Pro & Plus"),
    ("error", "Erreur"),
    ("loading", "Chargement..."),
    ("auth_error", "Erreur d'authentification"),
    ("renov_lvl", "Niveau Rénovation"),
    ("low", "Bas"),
    ("med", "Moyen"),
    ("high", "Haut"),
    ("renovation_cost", "Coût de rénovation"),
    ("estimated_value", "Valeur finale estimée"),
    ("estimated_roi", "ROI estimé"),
    ("works_duration", "Durée des travaux"),
    ("months", "Mois"),
    ("download_report", "📄 Télécharger le rapport complet (.docx)"),
    ("report_saved", "Rapport enregistré"),
    ("network_error", "Impossible de joindre le serveur."),
    ("registration_failed", "Échec de l'inscription"),
    ("upgrade_success", "Plan activé avec succès ! 🎉"),
    ("upgrade_failed", "Échec de l'activation"),
    ("unknown_error", "Erreur inconnue"),
    ("session_expired", "Session expirée, reconnectez-vous"),
    ("not_logged_in", "Erreur : vous n'êtes pas connecté !"),
    ("dashboard", "Tableau de bord"),
    ("google_opened", "Terminez la connexion dans le navigateur"),
];

pub(super) const DE: &[(&str, &str)] = &[
    ("tagline", "Der Immobilienmarkt, analysiert von KI."),
    ("hero_badge", "AI · Immobilien · Intelligence"),
    ("login", "Anmelden"),
    ("register", "Registrieren"),
    ("or", "oder"),
    ("continue_google", "Weiter mit Google"),
    ("email", "E-Mail"),
    ("password", "Passwort"),
    ("name", "Name"),
    ("name_ph", "Max Mustermann"),
    ("email_ph", "email@beispiel.de"),
    ("pass_ph", "••••••••"),
    ("have_account", "Bereits registriert?"),
    ("no_account", "Kein Konto?"),
    ("choose_plan", "Plan wählen"),
    ("plan_sub", "Immobilienanalyse mit KI"),
    ("monthly", "Monatlich"),
    ("yearly", "Jährlich"),
    ("save_yearly", "Spare 20%"),
    ("free_plan", "Free"),
    ("pro_plan", "Pro"),
    ("plus_plan", "Plus"),
    ("free_desc", "Zum Starten"),
    ("pro_desc", "Für Profis"),
    ("plus_desc", "Für Experten"),
    ("continue_with", "Weiter mit"),
    ("start_free", "Kostenlos starten"),
    ("per_month", "/ Monat"),
    ("per_year", "/ Jahr"),
    ("popular", "🔥 BELIEBT"),
    ("add_card", "Kartendaten"),
    ("card_sub", "Plan"),
    ("card_num", "Kartennummer"),
    ("expiry", "Gültig bis"),
    ("cvv", "CVV"),
    ("card_num_ph", "1234..."),
    ("expiry_ph", "MM/JJ"),
    ("activate", "Aktivieren"),
    ("skip_card", "Kostenlos weiter"),
    ("ff1", "Unbegrenzte Suche"),
    ("ff2", "Marktdaten"),
    ("ff3", "1 Bericht/Monat"),
    ("fnd", "Deep Research"),
    ("fnc", "Rechner"),
    ("fp1", "Alles in Free"),
    ("fp2", "Deep Research (2/Tag)"),
    ("fp3", "Rechner (2/Tag)"),
    ("fp4", "Unbegrenzte Berichte"),
    ("fp5", "Excel Export"),
    ("fpl1", "Alles in Pro"),
    ("fpl2", "Deep Research unbegrenzt"),
    ("fpl3", "Rechner unbegrenzt"),
    ("fpl4", "API Zugang"),
    ("fpl5", "Prio Support"),
    ("ricerca", "Suche"),
    ("deepresearch", "Deep Research"),
    ("calcola", "Rechner"),
    ("all_plans", "Alle Pläne"),
    ("pro_feat", "2/Tag · Pro | Unbegrenzt · Plus"),
    ("settings", "Einstellungen"),
    ("welcome", "Willkommen"),
    ("active_plan", "Aktiver Plan"),
    ("upg_to_pro", "↑ Upgrade auf Pro"),
    ("upg_to_plus", "↑ Upgrade auf Plus"),
    ("search_ph", "Suche..."),
    ("dash_title", "Was möchten Sie analysieren?"),
    ("dash_sub", "Echtzeit-Analyse mit KI."),
    ("analyze", "Analysieren →"),
    ("sug1", "Berlin Wohnungen"),
    ("sug2", "München Preise"),
    ("sug3", "Hamburg Miete"),
    ("sug4", "Zinsen 2025"),
    ("deep_title", "Tiefenanalyse mit KI."),
    ("deep_usage", "Verbleibend:"),
    ("deep_unlimited", "Unbegrenzt."),
    ("deep_ph", "Bsp: 'Haus renovieren Paris Zentrum, 110qm, ROI 22%'"),
    ("start_deep", "🚀 Starten"),
    ("calc_sub", "ROI und Renovierung berechnen."),
    ("calc_unlimited", "Unbegrenzt."),
    ("calc_usage", "Verbleibend:"),
    ("buy_price", "Kaufpreis (€)"),
    ("surface", "Fläche (m²)"),
    ("city", "Stadt"),
    ("buy_ph", "250000"),
    ("surf_ph", "80"),
    ("city_ph", "Berlin"),
    ("calc_btn", "🧮 ROI berechnen"),
    ("upgrade_title", "Funktion gesperrt"),
    ("upgrade_msg", "Benötigt Pro Plan."),
    ("upgrade_cta", "Upgrade auf Pro"),
    ("limit_title", "Limit erreicht"),
    ("limit_msg", "Upgrade auf Plus für unbegrenzten Zugang."),
    ("upg_plus", "→ Plus"),
    ("cancel", "Abbrechen"),
    ("close", "Schließen"),
    ("logout", "Abmelden"),
    ("pro_only", "Nur Pro & Plus"),
    ("error", "Fehler"),
    ("loading", "Laden..."),
    ("auth_error", "Anmeldefehler"),
    ("renov_lvl", "Renovierungsgrad"),
    ("low", "Niedrig"),
    ("med", "Mittel"),
    ("high", "Hoch"),
    ("renovation_cost", "Renovierungskosten"),
    ("estimated_value", "Geschätzter Endwert"),
    ("estimated_roi", "Geschätzter ROI"),
    ("works_duration", "Bauzeit"),
    ("months", "Monate"),
    ("download_report", "📄 Vollständigen Bericht herunterladen (.docx)"),
    ("report_saved", "Bericht gespeichert"),
    ("network_error", "Server nicht erreichbar."),
    ("registration_failed", "Registrierung fehlgeschlagen"),
    ("upgrade_success", "Plan erfolgreich aktiviert! 🎉"),
    ("upgrade_failed", "Aktivierung fehlgeschlagen"),
    ("unknown_error", "Unbekannter Fehler"),
    ("session_expired", "Sitzung abgelaufen, bitte erneut anmelden"),
    ("not_logged_in", "Fehler: nicht angemeldet!"),
    ("dashboard", "Dashboard"),
    ("google_opened", "Anmeldung im Browser abschließen"),
];

pub(super) const ES: &[(&str, &str)] = &[
    ("tagline", "El mercado inmobiliario analizado por IA."),
    ("hero_badge", "IA · Inmobiliaria · Inteligencia"),
    ("login", "Entrar"),
    ("register", "Registrarse"),
    ("or", "o"),
    ("continue_google", "Continuar con Google"),
    ("email", "Email"),
    ("password", "Contraseña"),
    ("name", "Nombre"),
    ("name_ph", "Juan Pérez"),
    ("email_ph", "email@ejemplo.com"),
    ("pass_ph", "••••••••"),
    ("have_account", "¿Ya tienes cuenta?"),
    ("no_account", "¿No tienes cuenta?"),
    ("choose_plan", "Elige tu plan"),
    ("plan_sub", "Potencia tu búsqueda con IA"),
    ("monthly", "Mensual"),
    ("yearly", "Anual"),
    ("save_yearly", "Ahorra 20%"),
    ("free_plan", "Gratis"),
    ("pro_plan", "Pro"),
    ("plus_plan", "Plus"),
    ("free_desc", "Para empezar"),
    ("pro_desc", "Para profesionales"),
    ("plus_desc", "Para expertos"),
    ("continue_with", "Continuar con"),
    ("start_free", "Empezar gratis"),
    ("per_month", "/ mes"),
    ("per_year", "/ año"),
    ("popular", "🔥 POPULAR"),
    ("add_card", "Datos de tarjeta"),
    ("card_sub", "Plan"),
    ("card_num", "Número tarjeta"),
    ("expiry", "Vencimiento"),
    ("cvv", "CVV"),
    ("card_num_ph", "1234..."),
    ("expiry_ph", "MM/AA"),
    ("activate", "Activar"),
    ("skip_card", "Continuar gratis"),
    ("ff1", "Búsqueda ilimitada"),
    ("ff2", "Datos de mercado"),
    ("ff3", "1 informe/mes"),
    ("fnd", "Deep Research"),
    ("fnc", "Calcular"),
    ("fp1", "Todo en Gratis"),
    ("fp2", "Deep Research (2/día)"),
    ("fp3", "Calcular (2/día)"),
    ("fp4", "Informes ilimitados"),
    ("fp5", "Exportar Excel"),
    ("fpl1", "Todo en Pro"),
    ("fpl2", "Deep Research ilimitado"),
    ("fpl3", "Cálculos ilimitados"),
    ("fpl4", "Acceso API"),
    ("fpl5", "Soporte prioritario"),
    ("ricerca", "Buscar"),
    ("deepresearch", "Deep Research"),
    ("calcola", "Calcular"),
    ("all_plans", "Todos los planes"),
    ("pro_feat", "2/día · Pro | Ilimitado · Plus"),
    ("settings", "Ajustes"),
    ("welcome", "Bienvenido"),
    ("active_plan", "Plan activo"),
    ("upg_to_pro", "↑ Mejorar a Pro"),
    ("upg_to_plus", "↑ Mejorar a Plus"),
    ("search_ph", "Buscar..."),
    ("dash_title", "¿Qué quieres analizar?"),
    ("dash_sub", "Análisis en tiempo real con IA."),
    ("analyze", "Analizar →"),
    ("sug1", "Madrid residencial"),
    ("sug2", "Barcelona precios"),
    ("sug3", "Alquiler Valencia"),
    ("sug4", "Hipotecas 2025"),
    ("deep_title", "Análisis profundo con IA."),
    ("deep_usage", "Restante hoy:"),
    ("deep_unlimited", "Ilimitado."),
    ("deep_ph", "Ej: 'Casa para reformar París centro, 110m2, ROI 22%'"),
    ("start_deep", "🚀 Iniciar"),
    ("calc_sub", "Calcular ROI real y reformas."),
    ("calc_unlimited", "Ilimitado."),
    ("calc_usage", "Restante:"),
    ("buy_price", "Precio compra (€)"),
    ("surface", "Superficie (m²)"),
    ("city", "Ciudad"),
    ("buy_ph", "250000"),
    ("surf_ph", "80"),
    ("city_ph", "Madrid"),
    ("calc_btn", "🧮 Calcular ROI"),
    ("upgrade_title", "Función bloqueada"),
    ("upgrade_msg", "Requiere plan Pro."),
    ("upgrade_cta", "Mejorar a Pro"),
    ("limit_title", "Límite alcanzado"),
    ("limit_msg", "Pasa a Plus para acceso ilimitado."),
    ("upg_plus", "→ Plus"),
    ("cancel", "Cancelar"),
    ("close", "Cerrar"),
    ("logout", "Salir"),
    ("pro_only", "Solo Pro y Plus"),
    ("error", "Error"),
    ("loading", "Cargando..."),
    ("auth_error", "Error de autenticación"),
    ("renov_lvl", "Nivel Reforma"),
    ("low", "Bajo"),
    ("med", "Medio"),
    ("high", "Alto"),
    ("renovation_cost", "Coste de reforma"),
    ("estimated_value", "Valor final estimado"),
    ("estimated_roi", "ROI estimado"),
    ("works_duration", "Duración de obra"),
    ("months", "Meses"),
    ("download_report", "📄 Descargar informe completo (.docx)"),
    ("report_saved", "Informe guardado"),
    ("network_error", "No se pudo conectar con el servidor."),
    ("registration_failed", "Registro fallido"),
    ("upgrade_success", "¡Plan activado con éxito! 🎉"),
    ("upgrade_failed", "Error en la activación"),
    ("unknown_error", "Error desconocido"),
    ("session_expired", "Sesión caducada, vuelve a entrar"),
    ("not_logged_in", "Error: no has iniciado sesión."),
    ("dashboard", "Panel"),
    ("google_opened", "Completa el acceso en el navegador"),
];

pub(super) const PT: &[(&str, &str)] = &[
    ("tagline", "O mercado imobiliário analisado por IA."),
    ("hero_badge", "IA · Imobiliário · Inteligência"),
    ("login", "Entrar"),
    ("register", "Registar"),
    ("or", "ou"),
    ("continue_google", "Continuar com Google"),
    ("email", "Email"),
    ("password", "Senha"),
    ("name", "Nome"),
    ("name_ph", "João Silva"),
    ("email_ph", "email@exemplo.com"),
    ("pass_ph", "••••••••"),
    ("have_account", "Já tem conta?"),
    ("no_account", "Não tem conta?"),
    ("choose_plan", "Escolha o plano"),
    ("plan_sub", "Potencie a sua pesquisa com IA"),
    ("monthly", "Mensal"),
    ("yearly", "Anual"),
    ("save_yearly", "Poupe 20%"),
    ("free_plan", "Grátis"),
    ("pro_plan", "Pro"),
    ("plus_plan", "Plus"),
    ("free_desc", "Para começar"),
    ("pro_desc", "Para profissionais"),
    ("plus_desc", "Para especialistas"),
    ("continue_with", "Continuar com"),
    ("start_free", "Começar grátis"),
    ("per_month", "/ mês"),
    ("per_year", "/ ano"),
    ("popular", "🔥 POPULAR"),
    ("add_card", "Dados do cartão"),
    ("card_sub", "Plano"),
    ("card_num", "Número cartão"),
    ("expiry", "Validade"),
    ("cvv", "CVV"),
    ("card_num_ph", "1234..."),
    ("expiry_ph", "MM/AA"),
    ("activate", "Ativar"),
    ("skip_card", "Continuar grátis"),
    ("ff1", "Pesquisa ilimitada"),
    ("ff2", "Dados de mercado"),
    ("ff3", "1 relatório/mês"),
    ("fnd", "Deep Research"),
    ("fnc", "Calcular"),
    ("fp1", "Tudo no Grátis"),
    ("fp2", "Deep Research (2/dia)"),
    ("fp3", "Calcular (2/dia)"),
    ("fp4", "Relatórios ilimitados"),
    ("fp5", "Exportar Excel"),
    ("fpl1", "Tudo no Pro"),
    ("fpl2", "Deep Research ilimitado"),
    ("fpl3", "Cálculos ilimitados"),
    ("fpl4", "Acesso API"),
    ("fpl5", "Suporte prioritário"),
    ("ricerca", "Pesquisar"),
    ("deepresearch", "Deep Research"),
    ("calcola", "Calcular"),
    ("all_plans", "Todos os planos"),
    ("pro_feat", "2/dia · Pro | Ilimitado · Plus"),
    ("settings", "Definições"),
    ("welcome", "Bem-vindo"),
    ("active_plan", "Plano ativo"),
    ("upg_to_pro", "↑ Upgrade para Pro"),
    ("upg_to_plus", "↑ Upgrade para Plus"),
    ("search_ph", "Pesquisar..."),
    ("dash_title", "O que quer analisar?"),
    ("dash_sub", "Análise em tempo real com IA."),
    ("analyze", "Analisar →"),
    ("sug1", "Lisboa residencial"),
    ("sug2", "Porto preços"),
    ("sug3", "Arrendamento Algarve"),
    ("sug4", "Crédito 2025"),
    ("deep_title", "Análise profunda com IA."),
    ("deep_usage", "Restante hoje:"),
    ("deep_unlimited", "Ilimitado."),
    ("deep_ph", "Ex: 'Casa para remodelar Paris centro, 110m2, ROI 22%'"),
    ("start_deep", "🚀 Iniciar"),
    ("calc_sub", "Calcular ROI real e obras."),
    ("calc_unlimited", "Ilimitado."),
    ("calc_usage", "Restante:"),
    ("buy_price", "Preço compra (€)"),
    ("surface", "Área (m²)"),
    ("city", "Cidade"),
    ("buy_ph", "250000"),
    ("surf_ph", "80"),
    ("city_ph", "Lisboa"),
    ("calc_btn", "🧮 Calcular ROI"),
    ("upgrade_title", "Função bloqueada"),
    ("upgrade_msg", "Requer plano Pro."),
    ("upgrade_cta", "Mudar para Pro"),
    ("limit_title", "Limite atingido"),
    ("limit_msg", "Mude para Plus para acesso ilimitado."),
    ("upg_plus", "→ Plus"),
    ("cancel", "Cancelar"),
    ("close", "Fechar"),
    ("logout", "Sair"),
    ("pro_only", "Só Pro e Plus"),
    ("error", "Erro"),
    ("loading", "A carregar..."),
    ("auth_error", "Erro de autenticação"),
    ("renov_lvl", "Nível Remodelação"),
    ("low", "Baixo"),
    ("med", "Médio"),
    ("high", "Alto"),
    ("renovation_cost", "Custo de remodelação"),
    ("estimated_value", "Valor final estimado"),
    ("estimated_roi", "ROI estimado"),
    ("works_duration", "Duração da obra"),
    ("months", "Meses"),
    ("download_report", "📄 Descarregar relatório completo (.docx)"),
    ("report_saved", "Relatório guardado"),
    ("network_error", "Não foi possível contactar o servidor."),
    ("registration_failed", "Falha no registo"),
    ("upgrade_success", "Plano ativado com sucesso! 🎉"),
    ("upgrade_failed", "Erro na ativação"),
    ("unknown_error", "Erro desconhecido"),
    ("session_expired", "Sessão expirada, entre novamente"),
    ("not_logged_in", "Erro: não tem sessão iniciada!"),
    ("dashboard", "Painel"),
    ("google_opened", "Conclua o acesso no navegador"),
];
