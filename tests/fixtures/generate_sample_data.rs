// ==========================================
// 发电机组项目状态看板 - 示例数据生成器
// ==========================================
// 用途: 在当前目录生成一份 projects.csv 示例数据
// 运行: cargo run --bin generate_sample_data
// ==========================================

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let out_path = "projects.csv";
    let mut writer = csv::Writer::from_path(out_path)?;

    writer.write_record([
        "Project_Type",
        "Project_Name",
        "Year",
        "Lead_Time",
        "Parts_Arrival_Date",
        "Installation_Complete_Date",
        "Testing_Date",
        "Cleaning",
        "Delivery_Date",
        "Description",
        "Remarks",
    ])?;

    // 日期列使用日在前格式 (dd/mm/yyyy)，与车间表格习惯一致
    let rows: [[&str; 11]; 8] = [
        [
            "Enclosure", "EN-2501 Hospital Backup", "2025", "10/03/2025", "05/01/2025",
            "20/02/2025", "28/02/2025", "YES", "08/03/2025", "KTA38 standby set", "",
        ],
        [
            "Enclosure", "EN-2502 Data Centre", "2025", "15/06/2025", "10/04/2025", "",
            "", "NO", "", "Twin KTA38 units", "installation pending",
        ],
        [
            "Open Set", "OS-2503 Quarry", "2025", "20/05/2025", "01/03/2025", "15/04/2025",
            "", "NO", "", "", "",
        ],
        [
            "Scania", "SC-2504 Telecom Shelter", "2025", "30/04/2025", "12/02/2025",
            "20/03/2025", "05/04/2025", "YES", "", "DC13 prime power", "awaiting shipment",
        ],
        [
            "Marine", "MT-2505 Ferry Refit", "2025", "15/09/2025", "", "", "", "", "",
            "", "parts on order",
        ],
        [
            "K50G3", "K5-2506 Mining Camp", "2025", "01/08/2025", "20/06/2025", "", "",
            "NO", "", "kta38 derivative", "",
        ],
        [
            "Enclosure", "EN-2407 Cold Store", "2024", "05/11/2024", "01/09/2024",
            "10/10/2024", "20/10/2024", "YES", "12/11/2024", "", "delivered late",
        ],
        [
            "Marine", "MT-2408 Tug Repower", "2024", "20/12/2024", "15/10/2024",
            "25/11/2024", "05/12/2024", "YES", "18/12/2024", "", "",
        ],
    ];

    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    println!("已生成示例数据: {}", out_path);
    Ok(())
}
