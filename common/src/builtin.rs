//! 組み込みセクターテーブル
//!
//! タイ国内のサイバーセキュリティ・アドバイザリー向けセクター分類。
//! キーワードは組織名・略称・業種語（英語/タイ語）。

use crate::types::{ManualOverride, SectorProfile};

/// 組み込みセクター一覧（テーブル順）
pub fn builtin_sectors() -> Vec<SectorProfile> {
    vec![
        sector(
            "Critical Infrastructure (CII)",
            &[
                "EGAT",
                "AOT",
                "PEA",
                "MEA",
                "PTT",
                "Airports of Thailand",
                "Electricity Generating",
                "Electric Power",
                "การไฟฟ้าฝ่ายผลิต",
                "การไฟฟ้านครหลวง",
                "การไฟฟ้าส่วนภูมิภาค",
                "ท่าอากาศยาน",
            ],
            Some("Thai Cyber Law, ISO 27001, NCSA"),
            Some("NCSA"),
            "Cyber Risk Assessment (IT/OT), Tabletop Exercise, IRP & Playbook, Gap Assessment",
        ),
        sector(
            "Banking / Finance / Insurance (BFSI)",
            &[
                "Krungthai",
                "SCB",
                "Bangkok Bank",
                "Muang Thai Life",
                "TMB",
                "Kasikorn",
                "KBank",
                "Krungsri",
                "Banking",
                "Insurance",
                "Securities",
                "ธนาคาร",
                "ประกันชีวิต",
            ],
            Some("PDPA, BOT Regulation, OIC Guidelines"),
            Some("BOT, OIC"),
            "PDPA Consult, Pentest, Awareness Training, Source Code Scan, IRP",
        ),
        sector(
            "Healthcare",
            &[
                "Bumrungrad",
                "BDMS",
                "Rama Hospital",
                "Siriraj",
                "Hospital",
                "โรงพยาบาล",
            ],
            Some("PDPA, Thai Cyber Law"),
            Some("PDPC, MOPH"),
            "PDPA Consult, Cyber Risk Assessment, Awareness Training, Backup Review",
        ),
        sector(
            "Government / SOE",
            &[
                "Ministry",
                "Department",
                "สำนักงาน",
                "การทางพิเศษ",
                "การประปา",
                "กรม",
            ],
            Some("Thai Cyber Law, อว3/อช3, ISO 27001"),
            Some("ETDA, NCSA"),
            "Cyber Gap Assessment, อว3/อช3 Consult, IRP, Tabletop Exercise",
        ),
        sector(
            "Government / Defense (CII)",
            &[
                "Royal Thai Army",
                "Royal Thai Navy",
                "Royal Thai Air Force",
                "Defence",
                "กองทัพบก",
                "กองทัพอากาศ",
                "กระทรวงกลาโหม",
            ],
            Some("Thai Cyber Law (CII), NCSA Code of Practice, ISO 27001"),
            Some("NCSA, Ministry of Defence"),
            "Cyber Risk Assessment (IT/OT), Red Team, IRP & Playbook, Tabletop Exercise",
        ),
        sector(
            "Software / SaaS",
            &[
                "LINE MAN",
                "SCB Tech X",
                "Appman",
                "Bitkub",
                "Software",
                "SaaS",
            ],
            Some("PDPA, Secure SDLC, Thai Cyber Law"),
            Some("PDPC, NCSA"),
            "Source Code Scan, Pentest, Secure SDLC Advisory",
        ),
        sector(
            "Telecommunications",
            &[
                "Advanced Info Service",
                "True Corporation",
                "dtac",
                "NT Telecom",
                "Telecommunications",
            ],
            Some("Thai Cyber Law (CII), NBTC Regulation, PDPA"),
            Some("NBTC, NCSA"),
            "Cyber Risk Assessment, Pentest, IRP & Playbook, Threat Intelligence",
        ),
        sector(
            "Retail / SME / Logistics",
            &[
                "Shopee",
                "Lazada",
                "Kerry",
                "Makro",
                "Flash Express",
                "CP All",
                "Central Retail",
                "Logistics",
                "Retail",
            ],
            Some("PDPA, BCP/DRP"),
            Some("PDPC"),
            "Phishing Sim, Awareness Training, PDPA Consult, VA Scan",
        ),
        sector(
            "Manufacturing / OT-heavy",
            &[
                "SCG",
                "IRPC",
                "Thai Union",
                "PTTGC",
                "Manufacturing",
                "Factory",
                "โรงงาน",
            ],
            Some("Thai Cyber Law, ISO 27001, Supply Chain Risk"),
            Some("NCSA"),
            "Cyber Risk Assessment (IT/OT), IRP, TTX, Backup/Restore Drill",
        ),
    ]
}

/// 組み込み手動マッピング
pub fn builtin_overrides() -> Vec<ManualOverride> {
    vec![
        ManualOverride {
            name: "กองทัพเรือ".into(),
            sector_name: "Government / Defense (CII)".into(),
            compliance_pressure: Some("Thai Cyber Law (CII), NCSA Code of Practice".into()),
            regulator: Some("NCSA, Ministry of Defence".into()),
            recommended_services: "Cyber Risk Assessment (IT/OT), Red Team, IRP & Playbook".into(),
        },
        ManualOverride {
            name: "สำนักงานตำรวจแห่งชาติ".into(),
            sector_name: "Government / Defense (CII)".into(),
            compliance_pressure: Some("Thai Cyber Law (CII), PDPA".into()),
            regulator: Some("NCSA".into()),
            recommended_services: "Cyber Gap Assessment, IRP & Playbook, Awareness Training".into(),
        },
        ManualOverride {
            name: "Bank of Thailand".into(),
            sector_name: "Banking / Finance / Insurance (BFSI)".into(),
            compliance_pressure: Some("Thai Cyber Law (CII), PDPA".into()),
            regulator: Some("NCSA".into()),
            recommended_services: "Cyber Risk Assessment, Tabletop Exercise, Red Team".into(),
        },
    ]
}

fn sector(
    name: &str,
    keywords: &[&str],
    compliance_pressure: Option<&str>,
    regulator: Option<&str>,
    recommended_services: &str,
) -> SectorProfile {
    SectorProfile {
        sector_name: name.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        compliance_pressure: compliance_pressure.map(str::to_string),
        regulator: regulator.map(str::to_string),
        recommended_services: recommended_services.to_string(),
    }
}
