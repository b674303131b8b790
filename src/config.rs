/// 构建配置
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// JSON 片段存放目录
    pub data_dir: String,
    /// 输出文件路径
    pub out_file: String,
    /// 模板文件路径
    pub template_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
            out_file: "./dist/eju-math.jsx".to_string(),
            template_file: "./template/app-template.jsx".to_string(),
        }
    }
}

impl Config {
    /// 从命令行参数解析配置，未指定的项使用默认值
    ///
    /// 支持的覆盖项：`--data <dir>`、`--out <file>`、`--template <file>`，
    /// 没有其他开关
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let get = |flag: &str, default: &str| -> String {
            args.iter()
                .position(|a| a == flag)
                .and_then(|i| args.get(i + 1))
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

        let default = Self::default();
        Self {
            data_dir: get("--data", &default.data_dir),
            out_file: get("--out", &default.out_file),
            template_file: get("--template", &default.template_file),
        }
    }
}
