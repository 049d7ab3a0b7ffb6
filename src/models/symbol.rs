use serde::Serialize;

/// Entry in the built-in BIST symbol catalog served by `GET /api/symbols`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StockSymbol {
    pub symbol: &'static str,
    pub name: &'static str,
}

pub const BIST_SYMBOLS: [StockSymbol; 15] = [
    StockSymbol { symbol: "XU100.IS", name: "BIST 100" },
    StockSymbol { symbol: "XU030.IS", name: "BIST 30" },
    StockSymbol { symbol: "THYAO.IS", name: "Türk Hava Yolları" },
    StockSymbol { symbol: "GARAN.IS", name: "Garanti BBVA" },
    StockSymbol { symbol: "ISCTR.IS", name: "İş Bankası (C)" },
    StockSymbol { symbol: "AKBNK.IS", name: "Akbank" },
    StockSymbol { symbol: "EREGL.IS", name: "Ereğli Demir Çelik" },
    StockSymbol { symbol: "TUPRS.IS", name: "Tüpraş" },
    StockSymbol { symbol: "SISE.IS", name: "Şişe Cam" },
    StockSymbol { symbol: "PETKM.IS", name: "Petkim" },
    StockSymbol { symbol: "KCHOL.IS", name: "Koç Holding" },
    StockSymbol { symbol: "SAHOL.IS", name: "Sabancı Holding" },
    StockSymbol { symbol: "BIMAS.IS", name: "BIM" },
    StockSymbol { symbol: "ASELS.IS", name: "Aselsan" },
    StockSymbol { symbol: "KOZAL.IS", name: "Koza Altın" },
];
