//! New-document templates.
//!
//! Template bodies may contain a `{date}` placeholder that is replaced
//! with the creation date when the template is rendered.

use serde::Serialize;

use crate::error::{Error, Result};

const DATE_PLACEHOLDER: &str = "{date}";

/// Language used for template names and descriptions.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    En,
    #[default]
    Zh,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub name_zh: &'static str,
    pub description: &'static str,
    pub description_zh: &'static str,
    #[serde(skip)]
    pub content: &'static str,
}

impl Template {
    pub const fn name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.name,
            Locale::Zh => self.name_zh,
        }
    }

    pub const fn description(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.description,
            Locale::Zh => self.description_zh,
        }
    }

    /// The template body with `date` filled in.
    pub fn render(&self, date: &str) -> String {
        self.content.replace(DATE_PLACEHOLDER, date)
    }
}

/// Look up a template by id.
///
/// # Errors
/// Returns [`Error::UnknownTemplate`] if no template has that id.
pub fn find(id: &str) -> Result<&'static Template> {
    TEMPLATES
        .iter()
        .find(|template| template.id == id)
        .ok_or_else(|| Error::UnknownTemplate(id.to_string()))
}

pub static TEMPLATES: &[Template] = &[
    Template {
        id: "blank",
        name: "Blank Document",
        name_zh: "空白文档",
        description: "Start with an empty document",
        description_zh: "从空白文档开始",
        content: "# 标题\n\n",
    },
    Template {
        id: "meeting",
        name: "Meeting Notes",
        name_zh: "会议记录",
        description: "Template for meeting minutes",
        description_zh: "会议纪要模板",
        content: r"# 会议记录

## 基本信息

- **日期：** {date}
- **时间：**
- **地点：**
- **主持人：**
- **记录人：**

## 参会人员

-

## 会议议题

### 议题一

**讨论内容：**



**决议：**



## 待办事项

- [ ] 待办事项 1 — 负责人：，截止日期：
- [ ] 待办事项 2 — 负责人：，截止日期：

## 下次会议

- **时间：**
- **议题：**
",
    },
    Template {
        id: "tech-doc",
        name: "Technical Document",
        name_zh: "技术文档",
        description: "Template for technical documentation",
        description_zh: "技术文档模板",
        content: r#"# 技术文档标题

## 1. 概述

简要描述本文档的目的和范围。

## 2. 架构设计

### 2.1 系统架构



### 2.2 技术栈

| 层级 | 技术 | 说明 |
| ------ | ------ | ------ |
| 前端 |  |  |
| 后端 |  |  |
| 数据库 |  |  |

## 3. API 接口

- **URL：** `/api/xxx`
- **方法：** GET
- **返回示例：**

```json
{
  "code": 200,
  "data": {}
}
```

## 4. 部署说明

1.
2.
3.

## 5. FAQ

**Q: 问题描述？**

A: 解答内容。
"#,
    },
    Template {
        id: "readme",
        name: "Project README",
        name_zh: "项目 README",
        description: "Template for project README",
        description_zh: "项目说明文档模板",
        content: r"# 项目名称

简要描述项目的功能和用途。

## 功能特性

- 特性 1
- 特性 2
- 特性 3

## 快速开始

### 安装

```bash
git clone https://github.com/xxx/xxx.git
```

### 使用说明



## 贡献指南

1. Fork 本仓库
2. 创建特性分支 (`git checkout -b feature/xxx`)
3. 提交更改
4. 创建 Pull Request

## 许可证

[MIT](LICENSE)
",
    },
    Template {
        id: "weekly",
        name: "Weekly Report",
        name_zh: "周报",
        description: "Template for weekly report",
        description_zh: "周报模板",
        content: r"# 周报

**姓名：**
**日期：** {date}
**部门：**

---

## 本周完成

- [ ] 任务 1
- [ ] 任务 2
- [ ] 任务 3

## 下周计划

- [ ] 计划 1
- [ ] 计划 2

## 问题与风险

| 问题 | 影响 | 解决方案 | 状态 |
| ------ | ------ | ------ | ------ |
|  |  |  |  |

## 备注

",
    },
    Template {
        id: "requirement",
        name: "Requirement Document",
        name_zh: "需求文档",
        description: "Template for requirement specification",
        description_zh: "需求规格说明书模板",
        content: r"# 需求文档

## 1. 背景

描述需求产生的背景和动机。

## 2. 目标

- 目标 1
- 目标 2

## 3. 功能需求

**用户故事：**

> 作为一个 [角色]，我希望 [功能]，以便 [价值]。

**验收标准：**

- [ ] 标准 1
- [ ] 标准 2

## 4. 非功能需求

- 响应时间：
- 并发量：

## 5. 排期

| 阶段 | 开始时间 | 结束时间 | 负责人 |
| ------ | ------ | ------ | ------ |
| 设计 |  |  |  |
| 开发 |  |  |  |
| 测试 |  |  |  |
",
    },
];
